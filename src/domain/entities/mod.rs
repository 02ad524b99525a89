//! Core domain entities.
//!
//! - [`UrlMapping`] - A short code mapped to its original URL

pub mod mapping;

pub use mapping::UrlMapping;
