//! Per-process state shared by every command.
//!
//! [`Context`] is built once after credentials resolve. It owns the loaded
//! configuration, the store it came from, and at most one API client per
//! credentialed provider.

use crate::config::{Config, ConfigStore};
use crate::constants::{
    ANTHROPIC_BASE_URL_ENV, ANTHROPIC_DEFAULT_BASE_URL, OPENAI_BASE_URL_ENV,
    OPENAI_DEFAULT_BASE_URL,
};
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::provider::{
    AnthropicClient, Catalog, OpenAiClient, Provider, ProviderKind, StaticCatalog,
};

/// Base URLs for both APIs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub openai: String,
    pub anthropic: String,
}

impl Endpoints {
    /// Public API roots, overridable with `OPENAI_BASE_URL` / `ANTHROPIC_BASE_URL`.
    pub fn from_env() -> Self {
        let var = |key: &str, default: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            openai: var(OPENAI_BASE_URL_ENV, OPENAI_DEFAULT_BASE_URL),
            anthropic: var(ANTHROPIC_BASE_URL_ENV, ANTHROPIC_DEFAULT_BASE_URL),
        }
    }
}

pub struct Context {
    pub config: Config,
    pub store: ConfigStore,
    openai: Option<OpenAiClient>,
    anthropic: Option<AnthropicClient>,
    anthropic_catalog: StaticCatalog,
}

impl Context {
    /// Loads the configuration and builds clients for the credentialed
    /// providers.
    pub fn new(credentials: Credentials, store: ConfigStore, endpoints: Endpoints) -> Result<Self> {
        let config = store.load(&credentials)?;
        tracing::debug!(
            "active provider {} with model {}",
            config.provider,
            config.model
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("terminai/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::HttpClient)?;

        let openai = credentials
            .get(ProviderKind::OpenAI)
            .map(|key| OpenAiClient::new(http.clone(), key, &endpoints.openai));
        let anthropic = credentials
            .get(ProviderKind::Anthropic)
            .map(|key| AnthropicClient::new(http.clone(), key, &endpoints.anthropic));

        Ok(Self {
            config,
            store,
            openai,
            anthropic,
            anthropic_catalog: StaticCatalog::anthropic(),
        })
    }

    /// The adapter for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCredentialFor`] if that provider has no API key.
    pub fn provider(&self, kind: ProviderKind) -> Result<Provider> {
        let provider = match kind {
            ProviderKind::OpenAI => self.openai.clone().map(Provider::OpenAI),
            ProviderKind::Anthropic => self.anthropic.clone().map(Provider::Anthropic),
        };
        provider.ok_or(Error::NoCredentialFor(kind))
    }

    /// The adapter for the configured provider.
    pub fn active_provider(&self) -> Result<Provider> {
        self.provider(self.config.provider)
    }

    /// The catalog for `kind`, if that provider is usable.
    pub fn catalog(&self, kind: ProviderKind) -> Option<&dyn Catalog> {
        match kind {
            ProviderKind::OpenAI => self.openai.as_ref().map(|c| c as &dyn Catalog),
            ProviderKind::Anthropic => self
                .anthropic
                .is_some()
                .then_some(&self.anthropic_catalog as &dyn Catalog),
        }
    }

    /// Usable catalogs in selection precedence order (OpenAI first).
    pub fn catalogs(&self) -> Vec<&dyn Catalog> {
        ProviderKind::ALL
            .into_iter()
            .filter_map(|kind| self.catalog(kind))
            .collect()
    }
}
