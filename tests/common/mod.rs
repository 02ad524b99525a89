#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use url_shortener_mem::routes::router;
use url_shortener_mem::state::AppState;

pub const BASE_URL: &str = "http://localhost:5000";

pub fn create_test_state() -> AppState {
    AppState::new(BASE_URL)
}

/// Full application router over a fresh, empty store.
pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Shortens `url` through the API and returns the short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    let body = response.json::<Value>();
    body["short_code"].as_str().unwrap().to_string()
}
