//! Bulk-driver error type.

/// Failure modes of the bulk encryption driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer length is not a multiple of the 16-byte block.
    #[error("buffer length {0} is not a multiple of 16")]
    InvalidLength(usize),
}
