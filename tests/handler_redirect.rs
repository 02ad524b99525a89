mod common;

#[tokio::test]
async fn test_redirect_success_and_click_count() {
    let server = common::create_test_server();
    let long_url = "https://www.another-example.org/path/to/resource";
    let code = common::shorten(&server, long_url).await;

    let response = server.get(&format!("/{}", code)).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), long_url);

    let stats = server.get(&format!("/api/stats/{}", code)).await;
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 1);

    let response = server.get(&format!("/{}", code)).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), long_url);

    let stats = server.get(&format!("/api/stats/{}", code)).await;
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 2);
}

#[tokio::test]
async fn test_redirect_preserves_url_verbatim() {
    let server = common::create_test_server();
    let long_url = "https://Example.com:443/Path?q=Rust&lang=en#section";
    let code = common::shorten(&server, long_url).await;

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), long_url);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server();

    let response = server.get("/nonexistent1").await;

    response.assert_status_not_found();
    assert!(response.json::<serde_json::Value>().get("error").is_some());
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let server = common::create_test_server();
    let code = common::shorten(&server, "https://example.com/case").await;

    let flipped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    // All-digit codes are unaffected by case flipping.
    if flipped != code {
        server.get(&format!("/{}", flipped)).await.assert_status_not_found();
    }
}
