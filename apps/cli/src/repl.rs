//! # Interactive Session
//!
//! A line-oriented stand-in for a calculator screen. Each typed command
//! maps to exactly one [`InputEvent`], events are applied one at a time in
//! arrival order, and the refreshed breakdown is printed after every one,
//! the way a screen redraws after each keystroke, slider drag or button tap.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Typed Command            Input Event                               │
//! │  ─────────────            ───────────                               │
//! │  bill 42.50        ────►  BillEdited("42.50")                       │
//! │  tip 18            ────►  TipSliderMoved(0.18)                      │
//! │  +                 ────►  SplitIncremented                          │
//! │  -                 ────►  SplitDecremented                          │
//! │  show              ────►  (read-only: print the breakdown)          │
//! │  quit              ────►  (leave the session)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown or malformed commands print a message and the session continues;
//! nothing the user types can end it except `quit` or end of input.

use std::io::{BufRead, Write};

use tracing::debug;

use tally_core::validation::validate_tip_percent;
use tally_core::TIP_SLIDER_STEPS;

use crate::error::CliError;
use crate::output;
use crate::state::{CalculatorState, InputEvent};

const HELP: &str = "\
commands:
  bill <text>    set the bill amount (raw text, parsed fail-soft)
  tip <percent>  set the tip percentage (whole number, 0-100)
  +              add a person to the split
  -              remove a person from the split
  show           print the current breakdown
  help           show this message
  quit           leave the session";

/// What one input line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Event(InputEvent),
    Show,
    Help,
    Quit,
}

/// Runs the interactive session until `quit` or end of input.
///
/// Generic over the reader and writer so tests can drive it with buffers.
pub fn run<R: BufRead, W: Write>(input: R, mut sink: W) -> Result<(), CliError> {
    let state = CalculatorState::new();

    writeln!(sink, "Tally interactive session. Type \"help\" for commands.")?;
    write!(sink, "> ")?;
    sink.flush()?;

    for line in input.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(Command::Quit) => {
                    debug!("session ended by quit");
                    return Ok(());
                }
                Ok(Command::Help) => writeln!(sink, "{HELP}")?,
                Ok(Command::Show) => {
                    let breakdown = state.with_calculator(|c| c.breakdown());
                    writeln!(sink, "{}", output::render_text(&breakdown))?;
                }
                Ok(Command::Event(event)) => {
                    let breakdown = state.dispatch(event);
                    writeln!(sink, "{}", output::render_text(&breakdown))?;
                }
                Err(message) => writeln!(sink, "{message}")?,
            }
        }

        write!(sink, "> ")?;
        sink.flush()?;
    }

    debug!("session ended by end of input");
    Ok(())
}

/// Parses one input line into a [`Command`].
fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "bill" => Ok(Command::Event(InputEvent::BillEdited(rest.to_string()))),
        "tip" => {
            let percent: u32 = rest
                .parse()
                .map_err(|_| format!("not a whole percent: {rest:?}"))?;
            validate_tip_percent(percent).map_err(|err| err.to_string())?;
            Ok(Command::Event(InputEvent::TipSliderMoved(
                f64::from(percent) / f64::from(TIP_SLIDER_STEPS),
            )))
        }
        "+" => Ok(Command::Event(InputEvent::SplitIncremented)),
        "-" => Ok(Command::Event(InputEvent::SplitDecremented)),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command {other:?}; try \"help\"")),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_bill_keeps_raw_text() {
        assert_eq!(
            parse_command("bill 42.50"),
            Ok(Command::Event(InputEvent::BillEdited("42.50".to_string())))
        );
        // Broken text is still an event; the engine degrades it to zero
        assert_eq!(
            parse_command("bill not-a-number"),
            Ok(Command::Event(InputEvent::BillEdited(
                "not-a-number".to_string()
            )))
        );
        // Bare "bill" clears the field
        assert_eq!(
            parse_command("bill"),
            Ok(Command::Event(InputEvent::BillEdited(String::new())))
        );
    }

    #[test]
    fn test_parse_tip_converts_percent_to_fraction() {
        assert_eq!(
            parse_command("tip 18"),
            Ok(Command::Event(InputEvent::TipSliderMoved(0.18)))
        );
        assert_eq!(
            parse_command("tip 0"),
            Ok(Command::Event(InputEvent::TipSliderMoved(0.0)))
        );
    }

    #[test]
    fn test_parse_tip_rejects_bad_percent() {
        assert!(parse_command("tip 101").is_err());
        assert!(parse_command("tip eighteen").is_err());
        assert!(parse_command("tip").is_err());
    }

    #[test]
    fn test_parse_split_buttons_and_controls() {
        assert_eq!(
            parse_command("+"),
            Ok(Command::Event(InputEvent::SplitIncremented))
        );
        assert_eq!(
            parse_command("-"),
            Ok(Command::Event(InputEvent::SplitDecremented))
        );
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn test_session_applies_events_in_order() {
        let input = Cursor::new("bill 100\ntip 18\n+\n+\n+\nquit\n");
        let mut sink = Vec::new();

        run(input, &mut sink).expect("session runs");

        let transcript = String::from_utf8(sink).expect("utf-8");
        // Final state after three "+": 118 / 4
        assert!(transcript.contains("Amount per person      29.50"));
        assert!(transcript.contains("Split                      4"));
    }

    #[test]
    fn test_session_survives_unknown_commands() {
        let input = Cursor::new("frobnicate\nbill 100\ntip 18\nshow\nquit\n");
        let mut sink = Vec::new();

        run(input, &mut sink).expect("session runs");

        let transcript = String::from_utf8(sink).expect("utf-8");
        assert!(transcript.contains("unknown command"));
        assert!(transcript.contains("Amount per person     118.00"));
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let input = Cursor::new("bill 100\n");
        let mut sink = Vec::new();

        run(input, &mut sink).expect("session runs");
    }
}
