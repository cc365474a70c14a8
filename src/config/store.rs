//! Loading and saving the persisted configuration record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Reads and writes `config.toml` at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard per-user location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(super::config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved record, or derives a default when there is none.
    ///
    /// A saved provider whose key is no longer available is replaced with the
    /// default for the credentialed provider. The saved model is otherwise
    /// returned as-is, even if it has since left its provider's catalog.
    ///
    /// # Errors
    ///
    /// A missing file is not an error. Any other read failure, or a file that
    /// does not parse, is.
    pub fn load(&self, credentials: &Credentials) -> Result<Config> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", self.path.display());
                return Ok(Config::default_for(credentials));
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: self.path.clone(),
            source,
        })?;

        if !credentials.has(config.provider) {
            let fallback = Config::default_for(credentials);
            tracing::warn!(
                "saved provider {} has no API key, using {}",
                config.provider,
                fallback.provider
            );
            return Ok(fallback);
        }
        Ok(config)
    }

    /// Replaces the saved record with `config`.
    ///
    /// The record is written to a sibling temp file and renamed into place,
    /// so readers see either the old record or the new one. The directory is
    /// created if needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let contents = toml::to_string_pretty(config)?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents).map_err(|e| Error::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!("saved config to {}", self.path.display());
        Ok(())
    }
}
