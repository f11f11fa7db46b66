//! # State Module
//!
//! Calculator session state for the terminal app.
//!
//! One state type only: the calculator itself. The immutable [`Calculator`]
//! value plus its reducer, together with the [`CalculatorState`] wrapper
//! the interactive session shares.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  one-shot mode:      Calculator  ── apply() per synthetic event     │
//! │                                                                     │
//! │  interactive mode:   CalculatorState (Arc<Mutex<Calculator>>)       │
//! │                      └── dispatch() per typed command               │
//! │                                                                     │
//! │  THREAD SAFETY: events arrive one per stdin line; the Mutex makes   │
//! │  the one-at-a-time ordering explicit.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;

pub use calculator::{Calculator, CalculatorState, InputEvent};
