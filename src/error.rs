//! Error types for the graft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for graft operations.
///
/// Per-row and per-file conversion failures are absorbed by the batch driver
/// and reported on the console; only failures that keep the batch from
/// proceeding at all (such as an unwritable output root) surface through
/// this type to `main`.
#[derive(Error, Debug)]
pub enum GraftError {
    /// User provided invalid arguments or a filesystem operation failed.
    #[error("{0}")]
    UserError(String),

    /// An input table could not be parsed.
    #[error("{0}")]
    ParseError(String),
}

impl GraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GraftError::UserError(_) => exit_codes::USER_ERROR,
            GraftError::ParseError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for graft operations.
pub type Result<T> = std::result::Result<T, GraftError>;
