//! # Tip Module
//!
//! The calculation engine proper: bill text in, tip amount and per-person
//! total out.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Engine Data Flow                                │
//! │                                                                     │
//! │  bill text ──► parse_bill_amount ──► bill: f64                      │
//! │                                          │                          │
//! │  tip fraction [0,1] ─────────────────────┤                          │
//! │                                          ▼                          │
//! │                              calculate_tip_amount                   │
//! │                                          │                          │
//! │                                          ▼                          │
//! │  persons (>= 1) ────────────► calculate_total_per_person            │
//! │                                          │                          │
//! │                                          ▼                          │
//! │                              total per person (unrounded)           │
//! │                                                                     │
//! │  FAIL SOFT: empty / unparseable bill text and bills of $1.00 or     │
//! │  less all produce 0.0. Nothing in this module ever errors.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is stateless. The front-end owns the current bill text, slider
//! fraction and party size, calls these functions afresh on every input
//! event, and stores only the latest returned values.

use crate::rounding::round_down_to_cents;
use crate::MIN_BILLABLE_AMOUNT;

// =============================================================================
// Bill Parsing
// =============================================================================

/// Parses raw bill text into an amount, failing soft.
///
/// Empty or unparseable text yields `0.0`. The bill field is live-edited, so
/// intermediate keystrokes like `"12."` or `""` are routine inputs here, not
/// errors. Surrounding whitespace is ignored.
///
/// ## Example
/// ```rust
/// use tally_core::tip::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount("100"), 100.0);
/// assert_eq!(parse_bill_amount(" 42.50 "), 42.5);
/// assert_eq!(parse_bill_amount(""), 0.0);
/// assert_eq!(parse_bill_amount("12..3"), 0.0);
/// ```
#[inline]
pub fn parse_bill_amount(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

// =============================================================================
// Tip Amount
// =============================================================================

/// Calculates the tip for a bill at a `[0, 1]` tip fraction.
///
/// ## Formula
/// `round_down_to_cents(bill_amount * round_down_to_cents(tip_fraction))`
///
/// The fraction is snapped to cents BEFORE the multiply. The slider already
/// moves in 0.01 steps, so the snap is normally a no-op, but it is part of
/// the contract and kept exact.
///
/// ## Edge Cases
/// - `bill_amount <= 1.0` yields exactly `0.0`. This is the
///   [`MIN_BILLABLE_AMOUNT`] floor, not a rounding artifact: a $1.00 bill
///   tips nothing.
/// - `tip_fraction <= 0.0` yields `0.0`.
///
/// ## Example
/// ```rust
/// use tally_core::tip::calculate_tip_amount;
///
/// assert_eq!(calculate_tip_amount(100.0, 0.18), 18.0);
/// assert_eq!(calculate_tip_amount(1.0, 0.5), 0.0);   // at the floor
/// assert_eq!(calculate_tip_amount(50.0, 0.0), 0.0);  // no tip selected
/// ```
pub fn calculate_tip_amount(bill_amount: f64, tip_fraction: f64) -> f64 {
    if bill_amount > MIN_BILLABLE_AMOUNT && tip_fraction > 0.0 {
        round_down_to_cents(bill_amount * round_down_to_cents(tip_fraction))
    } else {
        0.0
    }
}

// =============================================================================
// Per-Person Total
// =============================================================================

/// Calculates the total each person pays: `(bill + tip) / persons`.
///
/// Takes the RAW bill text, not a parsed amount, and parses it fail-soft
/// itself; empty or unparseable text yields `0.0`, as does a parsed bill at
/// or below [`MIN_BILLABLE_AMOUNT`].
///
/// No rounding is applied here. The quotient is returned as-is and rounded
/// to two decimals only at display time.
///
/// ## Precondition
/// `persons >= 1`. The engine performs no zero-check; callers enforce the
/// minimum party size (the split buttons clamp at one). Calling with
/// `persons == 0` is outside the contract.
///
/// ## Example
/// ```rust
/// use tally_core::tip::calculate_total_per_person;
///
/// assert_eq!(calculate_total_per_person("100", 18.0, 4), 29.5);
/// assert_eq!(calculate_total_per_person("100", 18.0, 1), 118.0);
/// assert_eq!(calculate_total_per_person("", 18.0, 2), 0.0);
/// ```
pub fn calculate_total_per_person(bill_text: &str, tip_amount: f64, persons: u32) -> f64 {
    let bill_amount = parse_bill_amount(bill_text);

    if bill_amount > MIN_BILLABLE_AMOUNT && !bill_text.is_empty() {
        (bill_amount + tip_amount) / f64::from(persons)
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill_amount() {
        assert_eq!(parse_bill_amount("100"), 100.0);
        assert_eq!(parse_bill_amount("42.50"), 42.5);
        assert_eq!(parse_bill_amount("  100  "), 100.0);
        assert_eq!(parse_bill_amount("0"), 0.0);
    }

    #[test]
    fn test_parse_bill_amount_fails_soft() {
        assert_eq!(parse_bill_amount(""), 0.0);
        assert_eq!(parse_bill_amount("abc"), 0.0);
        assert_eq!(parse_bill_amount("12..3"), 0.0);
        assert_eq!(parse_bill_amount("12,50"), 0.0);
    }

    #[test]
    fn test_tip_amount_basic() {
        // $100 at 18% = $18.00
        assert_eq!(calculate_tip_amount(100.0, 0.18), 18.0);
        // $50 at 20% = $10.00
        assert_eq!(calculate_tip_amount(50.0, 0.2), 10.0);
    }

    #[test]
    fn test_tip_amount_zero_below_billable_floor() {
        // Bills of $1.00 or less tip nothing - an explicit floor
        assert_eq!(calculate_tip_amount(1.0, 0.5), 0.0);
        assert_eq!(calculate_tip_amount(0.99, 0.5), 0.0);
        assert_eq!(calculate_tip_amount(0.0, 0.18), 0.0);
        // Just above the floor tips normally
        assert_eq!(calculate_tip_amount(1.01, 0.5), 0.5);
    }

    #[test]
    fn test_tip_amount_zero_without_tip_fraction() {
        assert_eq!(calculate_tip_amount(100.0, 0.0), 0.0);
        assert_eq!(calculate_tip_amount(100.0, -0.1), 0.0);
    }

    #[test]
    fn test_tip_amount_rounds_down() {
        // $33.33 at 15%: 33.33 * 0.15 = 4.9995 → $4.99, never $5.00
        assert_eq!(calculate_tip_amount(33.33, 0.15), 4.99);
    }

    #[test]
    fn test_tip_amount_snaps_fraction_to_cents_first() {
        // 0.185 snaps down to 0.18 before multiplying: $100 * 0.18 = $18.00
        assert_eq!(calculate_tip_amount(100.0, 0.185), 18.0);
        // Without the snap this would be $18.50
    }

    #[test]
    fn test_total_per_person_single_payer() {
        assert_eq!(calculate_total_per_person("100", 18.0, 1), 118.0);
    }

    #[test]
    fn test_total_per_person_split() {
        assert_eq!(calculate_total_per_person("100", 18.0, 4), 29.5);
        assert_eq!(calculate_total_per_person("50", 0.0, 2), 25.0);
    }

    #[test]
    fn test_total_per_person_zero_for_empty_or_bad_text() {
        assert_eq!(calculate_total_per_person("", 18.0, 2), 0.0);
        assert_eq!(calculate_total_per_person("abc", 18.0, 2), 0.0);
    }

    #[test]
    fn test_total_per_person_zero_below_billable_floor() {
        assert_eq!(calculate_total_per_person("0", 5.0, 2), 0.0);
        assert_eq!(calculate_total_per_person("1", 5.0, 2), 0.0);
        assert_eq!(calculate_total_per_person("0.99", 5.0, 2), 0.0);
    }

    #[test]
    fn test_total_per_person_is_unrounded() {
        // $10 bill + $0 tip, 3 people: the thirds stay unrounded here
        let per_person = calculate_total_per_person("10", 0.0, 3);
        assert!((per_person - 10.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engine_is_idempotent() {
        // Same inputs, same outputs - no hidden state between calls
        let first = (
            calculate_tip_amount(100.0, 0.18),
            calculate_total_per_person("100", 18.0, 4),
        );
        let second = (
            calculate_tip_amount(100.0, 0.18),
            calculate_total_per_person("100", 18.0, 4),
        );
        assert_eq!(first, second);
    }
}
