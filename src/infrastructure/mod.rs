//! Infrastructure layer implementing domain repository traits.
//!
//! - [`memory`] - Process-local mapping store

pub mod memory;
