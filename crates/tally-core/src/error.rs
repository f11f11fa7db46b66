//! # Error Types
//!
//! Validation error types for tally-core.
//!
//! ## Where Errors Can (and Cannot) Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                               │
//! │                                                                     │
//! │  Engine functions (tip.rs, rounding.rs)                             │
//! │  └── NEVER error. Invalid input degrades to 0.0 (fail soft).        │
//! │                                                                     │
//! │  Boundary validation (validation.rs)                                │
//! │  └── ValidationError - flag/input checks BEFORE values reach        │
//! │      the engine. Rejecting here never changes engine outputs.       │
//! │                                                                     │
//! │  CLI errors (in the app)                                            │
//! │  └── CliError - what the terminal user sees                         │
//! │                                                                     │
//! │  Flow: ValidationError → CliError → stderr                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised only at the outer boundary (CLI flags, front-end inputs), never by
/// the engine functions themselves.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite where a real number is required.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "tip fraction".to_string(),
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "tip fraction must be between 0 and 1");

        let err = ValidationError::BelowMinimum {
            field: "persons".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "persons must be at least 1");

        let err = ValidationError::NotFinite {
            field: "tip fraction".to_string(),
        };
        assert_eq!(err.to_string(), "tip fraction must be a finite number");
    }
}
