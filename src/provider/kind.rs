//! Provider kind enumeration and default model mapping.
//!
//! Defines [`ProviderKind`] which identifies which LLM backend to use,
//! and [`default_model_for`] which returns the default model for each provider.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANTHROPIC_API_KEY, DEFAULT_ANTHROPIC_MODEL, DEFAULT_OPENAI_MODEL, OPENAI_API_KEY,
};

/// Identifies which LLM provider to use.
///
/// Serialized as the lowercase provider name, which is also what the config
/// file stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI (GPT models, live model listing).
    OpenAI,
    /// Anthropic (Claude models, fixed model list).
    Anthropic,
}

impl ProviderKind {
    /// Every provider, in selection precedence order.
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenAI, ProviderKind::Anthropic];

    /// Name used in the config file and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    /// Environment key that carries this provider's secret.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::OpenAI => OPENAI_API_KEY,
            Self::Anthropic => ANTHROPIC_API_KEY,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the default model identifier for a given provider.
pub fn default_model_for(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::OpenAI => DEFAULT_OPENAI_MODEL,
        ProviderKind::Anthropic => DEFAULT_ANTHROPIC_MODEL,
    }
}
