//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Short link creation, redirect lookup and stats

pub mod services;
