use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config};
use crate::contacts::ImportConfig;
use crate::scoring::ScoringConfig;

/// Config with every setting spelled out, so users can see what to tweak.
pub fn default_config() -> Config {
    Config {
        scoring: Some(ScoringConfig::default()),
        import: Some(ImportConfig::default()),
    }
}

/// Write the default config to `path` (or the default location).
///
/// Refuses to overwrite an existing file unless `force` is set.
/// Returns the path written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    write_config(&config_path, &default_config())?;
    Ok(config_path)
}

fn write_config(config_path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}
