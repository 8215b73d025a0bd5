use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use super::config::Config;

/// Print the active vocabulary as TOML
pub fn run(output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_path.as_deref())?;
    let vocabulary = config.load_vocabulary()?;
    let toml = toml::to_string_pretty(&vocabulary).context("Failed to serialize vocabulary")?;

    match output {
        Some(path) => {
            std::fs::write(&path, toml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Vocabulary written to {}", path.display());
        }
        None => print!("{}", toml),
    }

    Ok(())
}
