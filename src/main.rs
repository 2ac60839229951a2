//! Graft: Batch converter from tabular prompt-template exports to Dotprompt files.
//!
//! This is the main entry point for the `graft` CLI. It parses arguments,
//! runs the conversion batch over the configured source tables, and handles
//! errors with proper exit codes.

mod cli;
mod convert;
pub mod emit;
pub mod error;
pub mod exit_codes;
pub mod prompt;
pub mod resolve;
pub mod rewrite;
pub mod sources;
pub mod table;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match convert::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
