//! CLI argument parsing for graft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The conversion itself lives in the `convert` module.

use clap::Parser;
use std::path::PathBuf;

/// Graft: Batch converter from tabular prompt-template exports to Dotprompt files.
///
/// Reads the known set of CSV exports from the input directory and writes
/// one `.prompt` file per template row, grouped into per-category
/// subdirectories under the output root. Rows and files that cannot be
/// converted are reported and skipped; the run continues either way.
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the CSV exports.
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Root directory for the generated .prompt files.
    #[arg(long, default_value = "prompts")]
    pub output_dir: PathBuf,

    /// Suffix colliding file names within a category (_2, _3, ...) instead
    /// of overwriting the earlier file.
    #[arg(long)]
    pub unique_suffix: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
