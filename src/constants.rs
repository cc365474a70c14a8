//! Centralized constants for terminai.
//!
//! Default strings, endpoints, and limits live here so they can be changed in
//! one place.

/// Application name used in directory paths.
pub const APP_NAME: &str = "terminai";

/// Configuration filename inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Credential filename inside the config directory.
pub const ENV_FILENAME: &str = ".env";

/// Overrides the per-user config directory when set.
pub const CONFIG_DIR_ENV: &str = "TERMINAI_CONFIG_DIR";

/// Filter directives for the stderr log, e.g. `AI_LOG=debug`.
pub const LOG_ENV: &str = "AI_LOG";

/// Log level used when `AI_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// --- Credentials ---

/// Environment key holding the OpenAI secret.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Environment key holding the Anthropic secret.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

// --- Provider defaults ---

/// Default model when OpenAI is the active provider.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Default model when Anthropic is the active provider.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-opus-20240229";

/// OpenAI API root. Overridable with `OPENAI_BASE_URL`.
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Anthropic API root. Overridable with `ANTHROPIC_BASE_URL`.
pub const ANTHROPIC_DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Environment key overriding the OpenAI API root.
pub const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment key overriding the Anthropic API root.
pub const ANTHROPIC_BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Output token cap sent with every Anthropic request (the API requires one).
pub const ANTHROPIC_MAX_TOKENS: u32 = 1000;

// --- Output ---

/// Header written before a streamed reply.
pub const RESPONSE_HEADER: &str = "AI:\n";
