use super::types::{WizardState, WIZARD_STATE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default wizard state file path (~/.config/tie-strength/wizard.json)
pub fn get_wizard_path() -> PathBuf {
    crate::config::get_config_dir().join("wizard.json")
}

/// Load wizard state from a JSON file
///
/// If the file doesn't exist, returns a fresh wizard.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_wizard_state(path: &Path) -> Result<WizardState> {
    if !path.exists() {
        return Ok(WizardState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open wizard state file at {}", path.display()))?;

    let state: WizardState =
        serde_json::from_reader(file).context("Failed to load wizard state")?;

    if state.version != WIZARD_STATE_VERSION {
        anyhow::bail!("Unsupported wizard state version: {}", state.version);
    }

    Ok(state)
}

/// Save wizard state to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_wizard_state(path: &Path, state: &WizardState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize wizard state")?;

    file.commit().context("Failed to save wizard state")?;

    Ok(())
}

/// Remove the persisted wizard, e.g. after a successful submit.
/// A missing file is not an error.
pub fn clear_wizard_state(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to remove wizard state at {}", path.display())),
    }
}
