//! # URL Shortener (in-memory)
//!
//! A small URL shortening service built with Axum. Links live in a single
//! process-local table and are discarded on shutdown.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and the store contract
//! - **Application Layer** ([`application`]) - URL validation and lookups
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory mapping store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Short codes are 6 alphanumeric characters and unique
//! - Shortening the same URL twice returns the same code
//! - Concurrent redirects never lose a click
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=5000 cargo run
//! curl -X POST localhost:5000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://www.example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{MappingRepository, ShortenOutcome};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryMappingRepository;
    pub use crate::state::AppState;
}
