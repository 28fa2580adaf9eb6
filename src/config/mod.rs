pub mod init;
mod schema;

pub use init::{default_config, write_default_config};
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/tie-strength/)
///
/// Falls back to the current directory when no home directory is known.
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tie-strength")
}

/// Get the default config file path (~/.config/tie-strength/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/tie-strength/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default location is not an error; the defaults apply.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            read_config(&config_path)
        }
        None => load_config_or_default(&get_config_path()),
    }
}

/// Load the config at `config_path`, or the defaults if no file is there.
pub fn load_config_or_default(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }
    read_config(config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}
