//! Shared error types for the crate.
//!
//! Only malformed input and report I/O produce errors. Heuristic
//! findings are advisory values, never `Err` — see the flag enums in
//! [`crate::core`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for claimcheck operations.
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Evidence category name outside the closed taxonomy
    #[error(
        "unknown evidence category '{0}' (expected one of: verified, calculated, estimated, inferred, projected)"
    )]
    UnknownCategory(String),

    /// A required input field was empty
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    /// Report serialization errors
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Report output errors
    #[error("failed to write {path}: {source}")]
    ReportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type using [`IntegrityError`].
pub type Result<T> = std::result::Result<T, IntegrityError>;
