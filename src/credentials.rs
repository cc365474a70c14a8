//! API key discovery.
//!
//! Keys come from the `.env` file in the config directory, loaded into the
//! process environment with `dotenvy`, and from whatever the shell already
//! exported. Variables already present in the environment win over the file.

use std::path::Path;

use colored::Colorize;

use crate::error::{Error, Result};
use crate::provider::ProviderKind;

/// Provider secrets resolved once at startup.
#[derive(Clone, Default)]
pub struct Credentials {
    openai: Option<String>,
    anthropic: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai", &self.openai.is_some())
            .field("anthropic", &self.anthropic.is_some())
            .finish()
    }
}

impl Credentials {
    /// Loads `env_file` (warning if it is missing) and reads both keys from
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] when neither key resolves, and
    /// [`Error::CredentialSource`] when the file exists but cannot be parsed.
    pub fn resolve(env_file: &Path) -> Result<Self> {
        if env_file.exists() {
            dotenvy::from_path(env_file).map_err(|source| Error::CredentialSource {
                path: env_file.to_path_buf(),
                source,
            })?;
            tracing::debug!("loaded credentials from {}", env_file.display());
        } else {
            println!(
                "{} .env file not found at {}. Please create one with your API keys.",
                "Warning:".yellow().bold(),
                env_file.display()
            );
        }

        Self::from_lookup(env_file, |key| std::env::var(key).ok())
    }

    /// Builds credentials from an arbitrary key lookup.
    ///
    /// Empty and whitespace-only values count as absent. `env_file` is only
    /// used for the remediation message.
    pub fn from_lookup(env_file: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fetch = |provider: ProviderKind| {
            lookup(provider.api_key_var()).filter(|value| !value.trim().is_empty())
        };
        let credentials = Self {
            openai: fetch(ProviderKind::OpenAI),
            anthropic: fetch(ProviderKind::Anthropic),
        };

        if credentials.is_empty() {
            return Err(Error::MissingCredentials {
                env_file: env_file.to_path_buf(),
            });
        }
        Ok(credentials)
    }

    /// Returns the secret for `provider`, if one resolved.
    pub fn get(&self, provider: ProviderKind) -> Option<&str> {
        match provider {
            ProviderKind::OpenAI => self.openai.as_deref(),
            ProviderKind::Anthropic => self.anthropic.as_deref(),
        }
    }

    pub fn has(&self, provider: ProviderKind) -> bool {
        self.get(provider).is_some()
    }

    fn is_empty(&self) -> bool {
        self.openai.is_none() && self.anthropic.is_none()
    }

    /// The provider a fresh configuration should use: OpenAI when its key is
    /// present, Anthropic otherwise.
    pub fn preferred_provider(&self) -> ProviderKind {
        ProviderKind::ALL
            .into_iter()
            .find(|p| self.has(*p))
            .unwrap_or(ProviderKind::Anthropic)
    }
}

#[cfg(test)]
impl Credentials {
    /// Test helper: credentials for the given providers with dummy keys.
    pub(crate) fn for_providers(providers: &[ProviderKind]) -> Self {
        let key = |p: ProviderKind| providers.contains(&p).then(|| format!("test-{p}-key"));
        Self {
            openai: key(ProviderKind::OpenAI),
            anthropic: key(ProviderKind::Anthropic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_both_keys_prefer_openai() {
        let creds = Credentials::from_lookup(
            Path::new(".env"),
            lookup(&[("OPENAI_API_KEY", "sk-a"), ("ANTHROPIC_API_KEY", "sk-b")]),
        )
        .unwrap();
        assert_eq!(creds.get(ProviderKind::OpenAI), Some("sk-a"));
        assert_eq!(creds.get(ProviderKind::Anthropic), Some("sk-b"));
        assert_eq!(creds.preferred_provider(), ProviderKind::OpenAI);
    }

    #[test]
    fn test_anthropic_only() {
        let creds =
            Credentials::from_lookup(Path::new(".env"), lookup(&[("ANTHROPIC_API_KEY", "sk-b")]))
                .unwrap();
        assert!(!creds.has(ProviderKind::OpenAI));
        assert_eq!(creds.preferred_provider(), ProviderKind::Anthropic);
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let creds = Credentials::from_lookup(
            Path::new(".env"),
            lookup(&[("OPENAI_API_KEY", ""), ("ANTHROPIC_API_KEY", "sk-b")]),
        )
        .unwrap();
        assert!(!creds.has(ProviderKind::OpenAI));
    }

    #[test]
    fn test_whitespace_value_counts_as_absent() {
        let creds = Credentials::from_lookup(
            Path::new(".env"),
            lookup(&[("OPENAI_API_KEY", "  "), ("ANTHROPIC_API_KEY", "sk-b")]),
        )
        .unwrap();
        assert!(!creds.has(ProviderKind::OpenAI));
        assert_eq!(creds.preferred_provider(), ProviderKind::Anthropic);

        let err = Credentials::from_lookup(Path::new(".env"), lookup(&[("OPENAI_API_KEY", "\t")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials { .. }));
    }

    #[test]
    fn test_no_keys_is_fatal_with_remediation() {
        let path = PathBuf::from("/tmp/terminai/.env");
        let err = Credentials::from_lookup(&path, lookup(&[])).unwrap_err();
        match &err {
            Error::MissingCredentials { env_file } => assert_eq!(env_file, &path),
            other => panic!("unexpected error: {other:?}"),
        }
        let text = err.to_string();
        assert!(text.contains("OPENAI_API_KEY="));
        assert!(text.contains("ANTHROPIC_API_KEY="));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::for_providers(&[ProviderKind::OpenAI]);
        let shown = format!("{creds:?}");
        assert!(!shown.contains("test-openai-key"));
    }
}
