//! In-memory storage backends.

pub mod in_memory_mapping_repository;

pub use in_memory_mapping_repository::InMemoryMappingRepository;
