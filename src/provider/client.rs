//! Provider dispatch.
//!
//! [`Provider`] wraps one adapter per backend behind enum dispatch, so the
//! streaming path never inspects strings to pick a code path.

use futures::stream::BoxStream;
use futures::StreamExt;

use super::anthropic::AnthropicClient;
use super::kind::ProviderKind;
use super::openai::OpenAiClient;
use crate::error::Result;

/// A configured LLM backend ready to stream completions.
#[derive(Clone)]
pub enum Provider {
    OpenAI(OpenAiClient),
    Anthropic(AnthropicClient),
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::OpenAI(_) => ProviderKind::OpenAI,
            Self::Anthropic(_) => ProviderKind::Anthropic,
        }
    }

    /// Streams the reply to `prompt` from `model` as text fragments.
    ///
    /// `model` is assumed to be valid for this provider; a stale id surfaces
    /// as a provider error once the request is sent.
    pub fn stream<'a>(&'a self, prompt: &'a str, model: &'a str) -> BoxStream<'a, Result<String>> {
        match self {
            Self::OpenAI(client) => client.stream(prompt, model).boxed(),
            Self::Anthropic(client) => client.stream(prompt, model).boxed(),
        }
    }
}
