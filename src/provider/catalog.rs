//! Model catalogs: which model ids each provider accepts.
//!
//! OpenAI exposes a listing endpoint, so its catalog is queried live on every
//! call. Anthropic has no listing API in this integration, so its catalog is
//! the compiled-in [`ANTHROPIC_MODELS`] list.

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::StreamExt;

use super::kind::ProviderKind;
use super::openai::OpenAiClient;
use crate::error::Result;

/// Known Anthropic model ids, in display order.
pub const ANTHROPIC_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20240620",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
];

/// The set of models valid for one provider.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Provider whose models this catalog enumerates.
    fn provider(&self) -> ProviderKind;

    /// Enumerates model ids once. Each call starts a new enumeration.
    fn list(&self) -> BoxStream<'_, Result<String>>;

    /// Whether `model` is currently in the catalog. Never cached.
    async fn contains(&self, model: &str) -> Result<bool> {
        let mut models = self.list();
        while let Some(id) = models.next().await {
            if id? == model {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog {
    provider: ProviderKind,
    models: &'static [&'static str],
}

impl StaticCatalog {
    pub const fn new(provider: ProviderKind, models: &'static [&'static str]) -> Self {
        Self { provider, models }
    }

    pub const fn anthropic() -> Self {
        Self::new(ProviderKind::Anthropic, ANTHROPIC_MODELS)
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn list(&self) -> BoxStream<'_, Result<String>> {
        stream::iter(self.models.iter().map(|m| Ok(m.to_string()))).boxed()
    }
}

#[async_trait]
impl Catalog for OpenAiClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    fn list(&self) -> BoxStream<'_, Result<String>> {
        self.list_models().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_anthropic_catalog_lists_four_models_in_order() {
        let catalog = StaticCatalog::anthropic();
        let models: Vec<String> = catalog
            .list()
            .map(|m| m.unwrap())
            .collect()
            .await;
        assert_eq!(models, ANTHROPIC_MODELS);
        assert_eq!(catalog.provider(), ProviderKind::Anthropic);
    }

    #[tokio::test]
    async fn test_contains_is_exact_match() {
        let catalog = StaticCatalog::anthropic();
        assert!(catalog.contains("claude-3-opus-20240229").await.unwrap());
        assert!(!catalog.contains("claude-3-opus").await.unwrap());
        assert!(!catalog.contains("gpt-4o").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_restarts_on_each_call() {
        let catalog = StaticCatalog::new(ProviderKind::OpenAI, &["gpt-4o", "gpt-4o-mini"]);
        let first: Vec<_> = catalog.list().collect().await;
        let second: Vec<_> = catalog.list().collect().await;
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }
}
