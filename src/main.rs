//! # VCV Converter
//!
//! A command-line tool for reducing ClinVar VCV release XML to JSON Lines.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a (optionally gzip-compressed) release
//! vcv-convert convert ClinVarVCVRelease_2024-03.xml.gz
//!
//! # Dump the built-in vocabulary as an editable TOML starting point
//! vcv-convert vocabulary --output vocabulary.toml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
