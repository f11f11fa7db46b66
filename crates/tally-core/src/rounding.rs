//! # Rounding Module
//!
//! Two-decimal rounding policy and display formatting.
//!
//! ## Why Floor, Not Half-Up?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING POLICY                                                │
//! │                                                                     │
//! │  Monetary values are rounded DOWN at the hundredths place:          │
//! │                                                                     │
//! │    2.675  → 2.67   (half-up would give 2.68)                        │
//! │    18.999 → 18.99                                                   │
//! │    -1.239 → -1.24  (toward negative infinity, not toward zero)      │
//! │                                                                     │
//! │  The tip is never rounded in the customer's favor upward; a         │
//! │  truncated cent stays truncated.                                    │
//! │                                                                     │
//! │  CANONICAL FORM: the two-decimal string rendering                   │
//! │    floor(x * 100) / 100 can land on a value like 0.07000000000000001│
//! │    so the floored value is re-rendered to two decimals and parsed   │
//! │    back. Comparisons should trust the two-decimal form, not raw     │
//! │    binary equality.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All rounding in this crate goes through [`round_down_to_cents`]. The
//! display-only [`format_amount`] shares the two-decimal rendering but never
//! feeds back into arithmetic.

// =============================================================================
// Numeric Rounding
// =============================================================================

/// Rounds a value down to whole cents (two decimal places).
///
/// Floor-based truncation at the hundredths place, then re-rendered through
/// the canonical two-decimal form. Rounds toward negative infinity, never
/// half-up.
///
/// ## Example
/// ```rust
/// use tally_core::rounding::round_down_to_cents;
///
/// assert_eq!(round_down_to_cents(2.675), 2.67);  // not 2.68
/// assert_eq!(round_down_to_cents(0.189), 0.18);
/// assert_eq!(round_down_to_cents(18.0), 18.0);
/// assert_eq!(round_down_to_cents(-1.239), -1.24); // toward -inf
/// ```
pub fn round_down_to_cents(value: f64) -> f64 {
    let floored = (value * 100.0).floor() / 100.0;
    // The two-decimal rendering is the canonical representation; parse it
    // back so the returned value agrees with what callers display.
    format!("{floored:.2}").parse().unwrap_or(floored)
}

/// Converts a `[0, 1]` slider fraction to a whole-number percentage.
///
/// Truncates: `0.18 → 18`, `0.999 → 99`. Input outside `[0, 1]` is not
/// validated here; the slider (or whichever caller stands in for it)
/// guarantees the domain.
///
/// ## Example
/// ```rust
/// use tally_core::rounding::fraction_to_percent;
///
/// assert_eq!(fraction_to_percent(0.18), 18);
/// assert_eq!(fraction_to_percent(0.5), 50);
/// assert_eq!(fraction_to_percent(1.0), 100);
/// ```
#[inline]
pub fn fraction_to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).floor() as u32
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Renders a value with exactly two decimal digits for display.
///
/// Display only. The per-person total, for example, is kept unrounded by the
/// engine and only passes through here at the edge of the screen.
///
/// ## Example
/// ```rust
/// use tally_core::rounding::format_amount;
///
/// assert_eq!(format_amount(29.5), "29.50");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
#[inline]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_down_truncates_not_half_up() {
        assert_eq!(round_down_to_cents(2.675), 2.67);
        assert_eq!(round_down_to_cents(0.189), 0.18);
        assert_eq!(round_down_to_cents(18.999), 18.99);
    }

    #[test]
    fn test_round_down_exact_values_unchanged() {
        assert_eq!(round_down_to_cents(0.0), 0.0);
        assert_eq!(round_down_to_cents(1.0), 1.0);
        assert_eq!(round_down_to_cents(18.0), 18.0);
        assert_eq!(round_down_to_cents(0.5), 0.5);
    }

    #[test]
    fn test_round_down_negative_goes_toward_negative_infinity() {
        // Floor, not truncation toward zero
        assert_eq!(round_down_to_cents(-1.239), -1.24);
        assert_eq!(round_down_to_cents(-0.5), -0.5);
    }

    #[test]
    fn test_round_down_is_idempotent() {
        for &x in &[2.675, 0.189, 100.0, -1.239, 0.07] {
            let once = round_down_to_cents(x);
            assert_eq!(round_down_to_cents(once), once);
        }
    }

    #[test]
    fn test_round_down_canonical_form_matches_display() {
        // The returned value re-renders to the same two-decimal string
        for &x in &[2.675, 0.189, 18.999, 0.07, 123.456] {
            let rounded = round_down_to_cents(x);
            assert_eq!(format_amount(rounded).parse::<f64>().ok(), Some(rounded));
        }
    }

    #[test]
    fn test_fraction_to_percent_truncates() {
        assert_eq!(fraction_to_percent(0.0), 0);
        assert_eq!(fraction_to_percent(0.18), 18);
        assert_eq!(fraction_to_percent(0.5), 50);
        assert_eq!(fraction_to_percent(0.999), 99);
        assert_eq!(fraction_to_percent(1.0), 100);
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(29.5), "29.50");
        assert_eq!(format_amount(118.0), "118.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(0.005), "0.01"); // display rounds, engine does not
    }
}
