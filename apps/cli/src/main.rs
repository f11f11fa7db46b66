//! # Tally Terminal Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Tally CLI                                  │
//! │                                                                     │
//! │  main.rs ────► Parses flags, sets up logging, dispatches            │
//! │                                                                     │
//! │  cli.rs ─────► One-shot mode: flags → events → breakdown            │
//! │                                                                     │
//! │  repl.rs ────► Interactive mode: stdin commands → events            │
//! │                                                                     │
//! │  state/ ─────► Calculator (immutable) + reducer + shared wrapper    │
//! │                                                                     │
//! │  output.rs ──► Text table / JSON rendering                          │
//! │                                 │                                   │
//! │                                 ▼                                   │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │                       tally-core                             │   │
//! │  │  rounding policy, tip math, boundary validation (no I/O)     │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (default `info`, `--verbose` → `debug`,
//!    `RUST_LOG` wins when set)
//! 3. Run one-shot or interactive mode
//! 4. Print errors to stderr, exit non-zero on failure

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod output;
mod repl;
mod state;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);
    info!("starting tally");

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides everything; otherwise our crates log at `info`, or
/// `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tally_cli=debug,tally_core=debug,info"
    } else {
        "tally_cli=info,tally_core=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
