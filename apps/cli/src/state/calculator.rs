//! # Calculator State
//!
//! The calculator session: an immutable state value plus a pure reducer.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                      │
//! │                                                                     │
//! │  User Action              Input Event            State Change       │
//! │  ───────────              ───────────            ────────────       │
//! │                                                                     │
//! │  Type in bill field ────► BillEdited(text) ────► bill_input = text  │
//! │                                                                     │
//! │  Drag tip slider ───────► TipSliderMoved(f) ───► tip_fraction = f   │
//! │                                                  (clamped to [0,1]) │
//! │                                                                     │
//! │  Tap "+" ───────────────► SplitIncremented ────► persons += 1       │
//! │                                                                     │
//! │  Tap "−" ───────────────► SplitDecremented ────► persons -= 1       │
//! │                                                  (clamped at 1)     │
//! │                                                                     │
//! │  AFTER EVERY EVENT both derived values are recomputed by calling    │
//! │  the engine afresh. The derived values are never edited directly    │
//! │  and never go stale.                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Reducer?
//! `apply(state, event) -> new state` keeps the full input history legal by
//! construction: the only writer is the reducer, the reducer always
//! recomputes, and a `Calculator` value can be inspected or snapshotted at
//! any point between events.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use tally_core::tip::{calculate_tip_amount, calculate_total_per_person, parse_bill_amount};
use tally_core::{TipBreakdown, DEFAULT_PERSONS, MIN_PERSONS};

// =============================================================================
// Input Events
// =============================================================================

/// One discrete user input. The four events of the calculator screen.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The bill text field changed (every keystroke, raw text).
    BillEdited(String),

    /// The tip slider moved to a `[0, 1]` fraction.
    TipSliderMoved(f64),

    /// The "+" split button was pressed.
    SplitIncremented,

    /// The "−" split button was pressed. Clamps at [`MIN_PERSONS`].
    SplitDecremented,
}

// =============================================================================
// Calculator
// =============================================================================

/// Immutable calculator state.
///
/// Three inputs (bill text, tip fraction, party size) and the two values
/// derived from them. Fields are private: the reducer is the only writer, so
/// the derived values always match the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    /// Raw bill text as typed, possibly empty or half-typed.
    bill_input: String,

    /// Tip slider position in `[0, 1]`.
    tip_fraction: f64,

    /// Party size, never below [`MIN_PERSONS`].
    persons: u32,

    /// Derived: tip on the whole bill.
    tip_amount: f64,

    /// Derived: what each person pays (unrounded).
    total_per_person: f64,
}

impl Calculator {
    /// A fresh session: empty bill, slider at zero, party of one.
    pub fn new() -> Self {
        Calculator {
            bill_input: String::new(),
            tip_fraction: 0.0,
            persons: DEFAULT_PERSONS,
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }

    /// The reducer: applies one input event and returns the next state.
    ///
    /// Both derived values are recomputed on every event, strictly after the
    /// input mutation, so no event can leave a stale tip or total behind.
    pub fn apply(&self, event: InputEvent) -> Calculator {
        let mut next = self.clone();

        match event {
            InputEvent::BillEdited(text) => {
                next.bill_input = text;
            }
            InputEvent::TipSliderMoved(fraction) => {
                // The slider guarantees [0, 1]; enforce the same domain for
                // callers that stand in for it.
                next.tip_fraction = fraction.clamp(0.0, 1.0);
            }
            InputEvent::SplitIncremented => {
                next.persons = next.persons.saturating_add(1);
            }
            InputEvent::SplitDecremented => {
                if next.persons > MIN_PERSONS {
                    next.persons -= 1;
                }
            }
        }

        next.recompute();
        next
    }

    /// Recomputes both derived values from the current inputs.
    fn recompute(&mut self) {
        self.tip_amount =
            calculate_tip_amount(parse_bill_amount(&self.bill_input), self.tip_fraction);
        self.total_per_person =
            calculate_total_per_person(&self.bill_input, self.tip_amount, self.persons);
    }

    /// Snapshots the current state as a [`TipBreakdown`].
    pub fn breakdown(&self) -> TipBreakdown {
        TipBreakdown::compute(&self.bill_input, self.tip_fraction, self.persons)
    }

    /// Raw bill text as last edited.
    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    /// Current slider position.
    pub fn tip_fraction(&self) -> f64 {
        self.tip_fraction
    }

    /// Current party size.
    pub fn persons(&self) -> u32 {
        self.persons
    }

    /// Tip on the whole bill, as of the last event.
    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    /// Per-person total, as of the last event.
    pub fn total_per_person(&self) -> f64 {
        self.total_per_person
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// Shared calculator state for the interactive session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Calculator>>`:
/// - `Arc`: shared ownership
/// - `Mutex`: one event is applied at a time, in arrival order
///
/// The REPL reads stdin line by line so events are already serialized; the
/// lock makes the ordering guarantee explicit rather than incidental.
#[derive(Debug)]
pub struct CalculatorState {
    calculator: Arc<Mutex<Calculator>>,
}

impl CalculatorState {
    /// Creates a fresh session.
    pub fn new() -> Self {
        CalculatorState {
            calculator: Arc::new(Mutex::new(Calculator::new())),
        }
    }

    /// Applies one event and returns the resulting breakdown.
    pub fn dispatch(&self, event: InputEvent) -> TipBreakdown {
        let mut calculator = self.calculator.lock().expect("calculator mutex poisoned");
        debug!(?event, "applying input event");
        *calculator = calculator.apply(event);
        calculator.breakdown()
    }

    /// Executes a function with read access to the calculator.
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Calculator) -> R,
    {
        let calculator = self.calculator.lock().expect("calculator mutex poisoned");
        f(&calculator)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
