//! # CLI Surface
//!
//! Flag parsing and the one-shot mode: turn the flags into the same event
//! sequence the screen would have produced, run them through the reducer,
//! print the breakdown once.

use clap::Parser;
use tracing::debug;

use tally_core::validation::{validate_person_count, validate_tip_percent};
use tally_core::{TipBreakdown, MIN_PERSONS, TIP_SLIDER_STEPS};

use crate::error::CliError;
use crate::output;
use crate::repl;
use crate::state::{Calculator, InputEvent};

/// Split a bill and tip from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Args {
    /// Bill amount as entered (raw text; empty or invalid computes as zero)
    #[arg(short, long, default_value = "")]
    pub bill: String,

    /// Tip percentage (whole number, 0-100)
    #[arg(short, long, default_value_t = 0)]
    pub tip: u32,

    /// Number of people splitting the bill
    #[arg(short, long, default_value_t = 1)]
    pub split: u32,

    /// Emit the breakdown as JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Start an interactive session (other value flags are ignored)
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Dispatches to interactive or one-shot mode.
pub fn run(args: Args) -> Result<(), CliError> {
    if args.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return repl::run(stdin.lock(), stdout.lock());
    }

    let breakdown = compute_breakdown(&args)?;

    if args.json {
        println!("{}", output::render_json(&breakdown)?);
    } else {
        println!("{}", output::render_text(&breakdown));
    }

    Ok(())
}

/// Validates the flags and replays them through the reducer.
///
/// The flags are replayed as the event sequence the screen would have seen:
/// one bill edit, one slider move, then `split - 1` presses of "+". Going
/// through the reducer (rather than calling the engine directly) keeps
/// one-shot and interactive mode on exactly one code path.
fn compute_breakdown(args: &Args) -> Result<TipBreakdown, CliError> {
    validate_tip_percent(args.tip)?;
    validate_person_count(args.split)?;

    let fraction = f64::from(args.tip) / f64::from(TIP_SLIDER_STEPS);
    debug!(bill = %args.bill, %fraction, persons = args.split, "one-shot computation");

    let mut calculator = Calculator::new()
        .apply(InputEvent::BillEdited(args.bill.clone()))
        .apply(InputEvent::TipSliderMoved(fraction));
    for _ in MIN_PERSONS..args.split {
        calculator = calculator.apply(InputEvent::SplitIncremented);
    }

    Ok(calculator.breakdown())
}

// =============================================================================
// Unit Tests
// =============================================================================
