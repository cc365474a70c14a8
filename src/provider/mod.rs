//! LLM provider abstraction for terminai.
//!
//! Speaks the OpenAI and Anthropic streaming HTTP APIs directly and
//! normalizes both into a stream of text fragments. [`Provider`] selects the
//! adapter from the configured [`ProviderKind`]; [`Catalog`] enumerates the
//! models each provider accepts.

mod anthropic;
mod catalog;
mod client;
mod http;
mod kind;
mod openai;
mod sse;
#[cfg(test)]
mod testing;

pub use anthropic::AnthropicClient;
pub use catalog::{Catalog, StaticCatalog};
pub use client::Provider;
pub use kind::{default_model_for, ProviderKind};
pub use openai::OpenAiClient;
