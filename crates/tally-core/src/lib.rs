//! # tally-core: Pure Calculation Engine for Tally
//!
//! This crate is the **heart** of Tally. It contains the complete tip/split
//! arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   Front-end (apps/cli)                      │   │
//! │  │    Bill input ──► Tip slider ──► Split +/- ──► Display      │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ one event at a time               │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 Calculator state + reducer                  │   │
//! │  │        reduce(state, event) -> new state (in the app)       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐               │   │
//! │  │   │  rounding │  │    tip    │  │ validation│               │   │
//! │  │   │ two-dec   │  │ tip amt   │  │  bounds   │               │   │
//! │  │   │ floor     │  │ per-person│  │  checks   │               │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘               │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO HIDDEN STATE • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rounding`] - Two-decimal floor rounding and display formatting
//! - [`tip`] - The engine proper: tip amount and per-person total
//! - [`types`] - The serializable [`TipBreakdown`] snapshot
//! - [`validation`] - Boundary checks for front-end input
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Fail Soft**: invalid or half-typed input degrades to `0.0`, never errors.
//!    Bill text arrives keystroke by keystroke; intermediate states like `"12."`
//!    must not blow up the screen.
//! 3. **No I/O**: terminal, file system and network access are FORBIDDEN here
//! 4. **Rounding is Policy**: all two-decimal rounding goes through one named
//!    primitive so the floor semantics live in exactly one place
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::tip::{calculate_tip_amount, calculate_total_per_person};
//!
//! // $100 bill, 18% tip
//! let tip = calculate_tip_amount(100.0, 0.18);
//! assert_eq!(tip, 18.0);
//!
//! // Split four ways
//! let per_person = calculate_total_per_person("100", tip, 4);
//! assert_eq!(per_person, 29.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod rounding;
pub mod tip;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::TipBreakdown` instead of
// `use tally_core::types::TipBreakdown`

pub use error::{ValidationError, ValidationResult};
pub use types::TipBreakdown;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// A bill must exceed this amount to produce a nonzero tip or per-person total.
///
/// ## Why 1 and not 0?
/// Inherited policy: a bill of $1.00 or less yields exactly `0.0` everywhere.
/// This is a deliberate floor, not a rounding artifact, and both engine
/// functions gate on it.
pub const MIN_BILLABLE_AMOUNT: f64 = 1.0;

/// Minimum party size. The split buttons clamp here; the engine itself
/// documents `persons >= MIN_PERSONS` as a precondition instead of guarding.
pub const MIN_PERSONS: u32 = 1;

/// Party size a fresh calculator starts with.
pub const DEFAULT_PERSONS: u32 = MIN_PERSONS;

/// Number of discrete steps on the tip slider.
///
/// The slider walks `[0.0, 1.0]` in steps of `1 / TIP_SLIDER_STEPS`, which is
/// why tip fractions are meaningful at a resolution of 0.01 and why
/// [`tip::calculate_tip_amount`] snaps the fraction to cents before using it.
pub const TIP_SLIDER_STEPS: u32 = 100;
