//! Struct definitions for the persisted configuration.

use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;
use crate::provider::{default_model_for, ProviderKind};

/// The active provider and model, stored as `config.toml`.
///
/// Exactly these two fields are written; the record is replaced wholesale on
/// every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend that receives prompts.
    pub provider: ProviderKind,
    /// Model identifier within that provider's catalog.
    pub model: String,
}

impl Config {
    pub fn new(provider: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// The configuration used when nothing has been saved yet: the preferred
    /// credentialed provider and its canonical default model.
    pub fn default_for(credentials: &Credentials) -> Self {
        let provider = credentials.preferred_provider();
        Self::new(provider, default_model_for(provider))
    }
}
