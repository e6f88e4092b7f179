//! Errors surfaced while generating or deriving look-up tables.

/// Failure modes of table generation and inversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied table is not a bijection of `0..=255`.
    #[error("look-up table is not a permutation of 0..=255")]
    InvalidLut,
    /// The operating-system randomness source failed to deliver seed bytes.
    #[error("operating-system entropy source unavailable")]
    EntropyUnavailable(#[source] rand::Error),
}
