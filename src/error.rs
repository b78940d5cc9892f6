//! Error types for the report rendering library.
//!
//! Validation errors are raised before a single byte of output is emitted;
//! invariant errors abort a render that would otherwise produce a corrupt
//! document.

/// Result type alias for report rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or delivering a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input report failed validation (missing or malformed field).
    #[error("Invalid report: {0}")]
    InvalidReport(String),

    /// A dimension percentage was outside the 0..=100 range.
    #[error("Invalid percentage for dimension {code}: {value}")]
    InvalidPercentage {
        /// Dimension code carrying the bad value
        code: String,
        /// The out-of-range value
        value: i64,
    },

    /// An internal serialization invariant was violated.
    ///
    /// Unreachable under a correct implementation. When it fires, the whole
    /// render is aborted: a document with a wrong xref offset or stream
    /// length silently corrupts random access for every reader.
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    /// IO error while writing to an in-memory buffer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile-generation collaborator returned an unusable result.
    #[error("Profile generation failed: {0}")]
    Profile(String),

    /// The payment collaborator could not create or verify a session.
    #[error("Payment session error: {0}")]
    Payment(String),

    /// The email collaborator failed to deliver the report.
    #[error("Email delivery failed: {0}")]
    Mail(String),
}
