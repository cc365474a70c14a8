//! Path resolution for the terminai config directory.

use std::path::PathBuf;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV, CONFIG_FILENAME, ENV_FILENAME};
use crate::error::{Error, Result};

/// Returns the directory holding `config.toml` and `.env`.
///
/// `TERMINAI_CONFIG_DIR` wins when set; otherwise this is the platform config
/// directory joined with `terminai` (`~/.config/terminai/` on Linux).
///
/// # Errors
///
/// Returns [`Error::NoConfigDir`] if the platform's config directory cannot be
/// determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?.join(APP_NAME);
    Ok(dir)
}

/// Returns the full path to the persisted configuration file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Returns the full path to the credential `.env` file.
pub fn env_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(ENV_FILENAME))
}
