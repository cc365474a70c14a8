//! Error types for terminai.
//!
//! Domain failures are variants of [`Error`]; the binary edge wraps them in
//! `anyhow` for reporting.

use std::path::PathBuf;

use crate::provider::ProviderKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither API key resolved. The message doubles as remediation text.
    #[error(
        "Error: No API keys found in {path}\n\n\
         Please add at least one API key to the .env file at {path}.\n\
         Example .env file content:\n\
         OPENAI_API_KEY='your_openai_api_key_here'\n\
         ANTHROPIC_API_KEY='your_anthropic_api_key_here'",
        path = .env_file.display()
    )]
    MissingCredentials { env_file: PathBuf },

    #[error("failed to read credentials from {}", .path.display())]
    CredentialSource {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("no API key configured for {0}")]
    NoCredentialFor(ProviderKind),

    #[error("Unknown model '{0}'")]
    UnknownModel(String),

    /// The provider answered with an error payload.
    #[error("{provider} API error ({status}): {body}")]
    Provider {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    /// An error frame arrived after the stream had started.
    #[error("{provider} stream error: {payload}")]
    ProviderStream {
        provider: ProviderKind,
        payload: String,
    },

    #[error("{provider} request failed")]
    Transport {
        provider: ProviderKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} sent an undecodable frame")]
    Decode {
        provider: ProviderKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_names_both_keys() {
        let err = Error::MissingCredentials {
            env_file: PathBuf::from("/home/me/.config/terminai/.env"),
        };
        let text = err.to_string();
        assert!(text.contains("/home/me/.config/terminai/.env"));
        assert!(text.contains("OPENAI_API_KEY='your_openai_api_key_here'"));
        assert!(text.contains("ANTHROPIC_API_KEY='your_anthropic_api_key_here'"));
    }

    #[test]
    fn test_provider_error_carries_payload() {
        let err = Error::Provider {
            provider: ProviderKind::Anthropic,
            status: 401,
            body: r#"{"error":"invalid x-api-key"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"anthropic API error (401): {"error":"invalid x-api-key"}"#
        );
    }
}
