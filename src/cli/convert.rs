use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use vcv_digest::vcv::{ConversionConfig, VcvConverter};

use super::config::Config;

/// Convert a VCV release to JSON Lines
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    progress_interval: Option<usize>,
) -> Result<()> {
    // Validate input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = Config::load(config_path.as_deref())?;
    let vocabulary = config.load_vocabulary()?;
    let output = output.unwrap_or_else(|| default_output_path(&input));

    // CLI flags take precedence over the config file
    let mut conversion = ConversionConfig::default();
    if let Some(interval) = progress_interval.or(config.conversion.progress_interval) {
        conversion.progress_interval = interval;
    }

    info!("VCV Converter - release XML to JSON Lines");
    info!("=========================================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    match &config.vocabulary.path {
        Some(path) => info!("Vocabulary: {}", path.display()),
        None => info!("Vocabulary: built-in"),
    }

    let converter = VcvConverter::with_config(&vocabulary, conversion);

    info!("Starting conversion...");
    let stats = converter
        .convert(&input, &output)
        .context("Conversion failed")?;

    println!("{}", stats.format_colored());
    info!(
        "  Input file size: {} bytes ({:.2} MB)",
        stats.source_file_size,
        stats.source_file_size as f64 / 1024.0 / 1024.0
    );

    Ok(())
}

/// `release.xml.gz` -> `release.jsonl`, next to the input
fn default_output_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default().to_string_lossy();
    let stem = name.trim_end_matches(".gz").trim_end_matches(".xml");
    input.with_file_name(format!("{}.jsonl", stem))
}
