//! # Output Rendering
//!
//! Turns a [`TipBreakdown`] into what the terminal shows: a small text table
//! for humans, or JSON for machine consumers.
//!
//! All amounts pass through the two-decimal display formatter here and
//! nowhere earlier; the engine hands over unrounded values.

use tally_core::rounding::format_amount;
use tally_core::TipBreakdown;

/// Renders the breakdown as a small table: the per-person total on top,
/// then the inputs it came from.
///
/// ```text
/// Amount per person      29.50
/// ----------------------------
/// Bill                  100.00
/// Tip (18%)              18.00
/// Split                      4
/// ```
pub fn render_text(breakdown: &TipBreakdown) -> String {
    let mut lines = Vec::with_capacity(5);

    lines.push(row(
        "Amount per person",
        &format_amount(breakdown.total_per_person),
    ));
    lines.push("-".repeat(WIDTH));
    lines.push(row("Bill", &format_amount(breakdown.bill_amount)));
    lines.push(row(
        &format!("Tip ({}%)", breakdown.tip_percent),
        &format_amount(breakdown.tip_amount),
    ));
    lines.push(row("Split", &breakdown.persons.to_string()));

    lines.join("\n")
}

/// Renders the breakdown as pretty-printed JSON.
pub fn render_json(breakdown: &TipBreakdown) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(breakdown)
}

const WIDTH: usize = 28;

fn row(label: &str, value: &str) -> String {
    let padding = WIDTH.saturating_sub(label.len() + value.len());
    format!("{label}{}{value}", " ".repeat(padding))
}
