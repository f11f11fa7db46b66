//! # Breakdown Types
//!
//! The serializable snapshot of one full tip computation.
//!
//! ## Where It Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  bill text, tip fraction, persons                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  TipBreakdown::compute ── runs the engine functions in order ──┐    │
//! │                                                                │    │
//! │  { billAmount, tipPercent, tipAmount, persons, totalPerPerson }◄┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Front-end renders it (text table or JSON)                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::rounding::fraction_to_percent;
use crate::tip::{calculate_tip_amount, calculate_total_per_person, parse_bill_amount};

/// One full tip computation, ready for display or serialization.
///
/// Built by [`TipBreakdown::compute`], which runs the engine functions in
/// their natural order: parse the bill, derive the tip, derive the split.
/// Holds plain values with no behavior of its own; amounts are unrounded and
/// the front-end formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipBreakdown {
    /// Parsed bill amount (`0.0` for empty/unparseable input).
    pub bill_amount: f64,

    /// Whole-number tip percentage, for the label next to the slider.
    pub tip_percent: u32,

    /// Tip on the whole bill, rounded down to cents by the engine.
    pub tip_amount: f64,

    /// Party size the bill is split between.
    pub persons: u32,

    /// What each person pays. Unrounded; format at display time.
    pub total_per_person: f64,
}

impl TipBreakdown {
    /// Runs the engine over the three raw inputs and captures the result.
    ///
    /// ## Precondition
    /// `persons >= 1`, enforced by callers (see
    /// [`calculate_total_per_person`]).
    pub fn compute(bill_text: &str, tip_fraction: f64, persons: u32) -> Self {
        let tip_amount = calculate_tip_amount(parse_bill_amount(bill_text), tip_fraction);
        let total_per_person = calculate_total_per_person(bill_text, tip_amount, persons);

        TipBreakdown {
            bill_amount: parse_bill_amount(bill_text),
            tip_percent: fraction_to_percent(tip_fraction),
            tip_amount,
            persons,
            total_per_person,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_full_scenario() {
        let breakdown = TipBreakdown::compute("100", 0.18, 4);

        assert_eq!(breakdown.bill_amount, 100.0);
        assert_eq!(breakdown.tip_percent, 18);
        assert_eq!(breakdown.tip_amount, 18.0);
        assert_eq!(breakdown.persons, 4);
        assert_eq!(breakdown.total_per_person, 29.5);
    }

    #[test]
    fn test_compute_empty_bill_is_all_zero() {
        let breakdown = TipBreakdown::compute("", 0.18, 2);

        assert_eq!(breakdown.bill_amount, 0.0);
        assert_eq!(breakdown.tip_amount, 0.0);
        assert_eq!(breakdown.total_per_person, 0.0);
        // The percent label still reflects the slider
        assert_eq!(breakdown.tip_percent, 18);
    }

    #[test]
    fn test_compute_no_tip_still_splits() {
        let breakdown = TipBreakdown::compute("50", 0.0, 2);

        assert_eq!(breakdown.tip_amount, 0.0);
        assert_eq!(breakdown.total_per_person, 25.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let breakdown = TipBreakdown::compute("100", 0.18, 1);
        let json = serde_json::to_value(&breakdown).expect("serializes");

        assert_eq!(json["billAmount"], 100.0);
        assert_eq!(json["tipPercent"], 18);
        assert_eq!(json["tipAmount"], 18.0);
        assert_eq!(json["persons"], 1);
        assert_eq!(json["totalPerPerson"], 118.0);
    }
}
