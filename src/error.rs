//! Error types for a batch run.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a batch run can report.
///
/// Unknown instruction symbols and out-of-bounds advances are not
/// errors; the transition function absorbs both without ever returning
/// a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// First input line absent or not two non-negative integers.
    #[error("malformed lawn spec: {0}")]
    MalformedLawnSpec(String),

    /// Record line missing required fields or with unparsable tokens.
    #[error("malformed mower record: {0}")]
    MalformedMowerRecord(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
