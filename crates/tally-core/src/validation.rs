//! # Validation Module
//!
//! Boundary checks for values arriving from outside the engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Widget / flag parsing                                     │
//! │  ├── The slider can only emit [0, 1]; clap only parses integers     │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  └── Range checks before values are turned into engine inputs       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: The engine itself                                         │
//! │  └── NO validation. Fail-soft 0.0 outputs, documented               │
//! │      preconditions. Rejecting input here would change observable    │
//! │      outputs, so it never happens.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bill text is deliberately NOT validated anywhere: half-typed input is a
//! normal state of a live text field and the engine already degrades it to
//! `0.0`.

use crate::error::{ValidationError, ValidationResult};
use crate::{MIN_PERSONS, TIP_SLIDER_STEPS};

// =============================================================================
// Tip Validators
// =============================================================================

/// Validates a tip fraction.
///
/// ## Rules
/// - Must be finite (not NaN, not infinite)
/// - Must lie in `[0, 1]`
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_tip_fraction;
///
/// assert!(validate_tip_fraction(0.18).is_ok());
/// assert!(validate_tip_fraction(0.0).is_ok());
/// assert!(validate_tip_fraction(1.0).is_ok());
/// assert!(validate_tip_fraction(1.5).is_err());
/// assert!(validate_tip_fraction(f64::NAN).is_err());
/// ```
pub fn validate_tip_fraction(fraction: f64) -> ValidationResult<()> {
    if !fraction.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tip fraction".to_string(),
        });
    }

    if !(0.0..=1.0).contains(&fraction) {
        return Err(ValidationError::OutOfRange {
            field: "tip fraction".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

/// Validates a whole-number tip percentage.
///
/// ## Rules
/// - Must not exceed [`TIP_SLIDER_STEPS`] (100%), the top of the slider
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_tip_percent;
///
/// assert!(validate_tip_percent(18).is_ok());
/// assert!(validate_tip_percent(100).is_ok());
/// assert!(validate_tip_percent(101).is_err());
/// ```
pub fn validate_tip_percent(percent: u32) -> ValidationResult<()> {
    if percent > TIP_SLIDER_STEPS {
        return Err(ValidationError::OutOfRange {
            field: "tip percent".to_string(),
            min: 0.0,
            max: f64::from(TIP_SLIDER_STEPS),
        });
    }

    Ok(())
}

// =============================================================================
// Party-Size Validator
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - Must be at least [`MIN_PERSONS`] (1)
///
/// This runs only at the boundary. Inside the app the split buttons clamp at
/// the minimum instead of erroring, and the engine documents the
/// precondition without checking it.
pub fn validate_person_count(persons: u32) -> ValidationResult<()> {
    if persons < MIN_PERSONS {
        return Err(ValidationError::BelowMinimum {
            field: "persons".to_string(),
            min: MIN_PERSONS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
