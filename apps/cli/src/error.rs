//! # CLI Error Type
//!
//! Unified error type for the terminal app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                              │
//! │                                                                     │
//! │  Flag validation ──── ValidationError ──┐                           │
//! │                                         ├──► CliError ──► stderr    │
//! │  JSON encoding ────── serde_json error ─┤        │                  │
//! │                                         │        ▼                  │
//! │  Terminal I/O ─────── io::Error ────────┘   exit code 1             │
//! │                                                                     │
//! │  The engine itself contributes NOTHING here: it is fail-soft and    │
//! │  cannot error. Everything below is boundary plumbing.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tally_core::ValidationError;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value failed boundary validation.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The breakdown could not be encoded as JSON.
    #[error("failed to encode breakdown as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading commands or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err: CliError = ValidationError::BelowMinimum {
            field: "persons".to_string(),
            min: 1,
        }
        .into();

        assert_eq!(err.to_string(), "invalid input: persons must be at least 1");
    }
}
