//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, ShortenOutcome};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
