use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod vocabulary;

/// vcv-convert - ClinVar VCV release classifier
#[derive(Parser)]
#[command(name = "vcv-convert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a VCV release to JSON Lines
    Convert {
        /// Input release file path (.xml or .xml.gz)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON Lines path (defaults to the input name with .jsonl)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Log progress every N written items (0 disables)
        #[arg(long, value_name = "N")]
        progress_interval: Option<usize>,
    },

    /// Print the classification vocabulary as TOML
    Vocabulary {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Load the vocabulary named in this TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            progress_interval,
        } => convert::run(input, output, config, progress_interval),
        Commands::Vocabulary { output, config } => vocabulary::run(output, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from([
            "vcv-convert",
            "-vv",
            "convert",
            "release.xml.gz",
            "--progress-interval",
            "500",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        match cli.command {
            Commands::Convert {
                input,
                output,
                config,
                progress_interval,
            } => {
                assert_eq!(input, PathBuf::from("release.xml.gz"));
                assert_eq!(output, None);
                assert_eq!(config, None);
                assert_eq!(progress_interval, Some(500));
            }
            Commands::Vocabulary { .. } => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Cli::try_parse_from(["vcv-convert", "convert"]).is_err());
    }
}
