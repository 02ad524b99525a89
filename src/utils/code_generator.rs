//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). A generated code is not unique on its own; the
//! mapping store regenerates on collision.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code of [`CODE_LENGTH`] alphanumeric characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Source of candidate short codes.
///
/// The in-memory store is generic over this trait so that tests can script
/// the sequence of candidates (e.g. to force a collision).
pub trait CodeGenerator: Send + Sync + 'static {
    /// Produces a candidate short code.
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}
