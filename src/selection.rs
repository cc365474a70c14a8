//! Model selection: validate a requested id against the catalogs and persist it.

use crate::config::{Config, ConfigStore};
use crate::error::{Error, Result};
use crate::provider::Catalog;

/// Finds the first catalog that contains `requested`.
///
/// Catalogs are checked in the given order, so earlier providers win a tie.
///
/// # Errors
///
/// Returns [`Error::UnknownModel`] when no catalog lists the model, or the
/// catalog's own error if a live listing fails.
pub async fn resolve_selection(requested: &str, catalogs: &[&dyn Catalog]) -> Result<Config> {
    for catalog in catalogs {
        if catalog.contains(requested).await? {
            tracing::debug!("{requested} found in {} catalog", catalog.provider());
            return Ok(Config::new(catalog.provider(), requested));
        }
    }
    Err(Error::UnknownModel(requested.to_string()))
}

/// Validates `requested` and saves it as the active selection.
///
/// Nothing is written unless validation succeeds.
pub async fn select_model(
    requested: &str,
    catalogs: &[&dyn Catalog],
    store: &ConfigStore,
) -> Result<Config> {
    let config = resolve_selection(requested, catalogs).await?;
    store.save(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::provider::{ProviderKind, StaticCatalog};

    const OPENAI: StaticCatalog =
        StaticCatalog::new(ProviderKind::OpenAI, &["gpt-3.5-turbo", "gpt-4o", "shared-id"]);
    const ANTHROPIC: StaticCatalog = StaticCatalog::anthropic();
    const ANTHROPIC_WITH_SHARED: StaticCatalog =
        StaticCatalog::new(ProviderKind::Anthropic, &["shared-id"]);

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("config.toml"))
    }

    #[tokio::test]
    async fn test_selecting_anthropic_model_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let creds = Credentials::for_providers(&ProviderKind::ALL);

        let config = select_model("claude-3-opus-20240229", &[&OPENAI, &ANTHROPIC], &store)
            .await
            .unwrap();
        let expected = Config::new(ProviderKind::Anthropic, "claude-3-opus-20240229");
        assert_eq!(config, expected);
        assert_eq!(store.load(&creds).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_unknown_model_leaves_config_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let creds = Credentials::for_providers(&ProviderKind::ALL);
        let before = Config::new(ProviderKind::OpenAI, "gpt-4o");
        store.save(&before).unwrap();

        let err = select_model("not-a-real-model", &[&OPENAI, &ANTHROPIC], &store)
            .await
            .unwrap_err();
        assert!(matches!(&err, Error::UnknownModel(m) if m == "not-a-real-model"));
        assert!(err.to_string().contains("not-a-real-model"));
        assert_eq!(store.load(&creds).unwrap(), before);
    }

    #[tokio::test]
    async fn test_rejection_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = select_model("not-a-real-model", &[&OPENAI], &store).await;
        assert!(result.is_err());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_openai_only_rejects_anthropic_models() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = select_model("claude-3-opus-20240229", &[&OPENAI], &store).await;
        assert!(matches!(result, Err(Error::UnknownModel(_))));

        let config = select_model("gpt-4o", &[&OPENAI], &store).await.unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAI);
    }

    #[tokio::test]
    async fn test_openai_wins_a_tie() {
        let config = resolve_selection("shared-id", &[&OPENAI, &ANTHROPIC_WITH_SHARED])
            .await
            .unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAI);
    }
}
