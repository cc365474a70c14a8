//! Persisted provider/model selection for terminai.
//!
//! The selection is stored as TOML at the platform's config path
//! (e.g. `~/.config/terminai/config.toml` on Linux), next to the `.env` file
//! that supplies API keys.

mod paths;
mod store;
mod types;

pub use paths::{config_path, env_file_path};
pub use store::ConfigStore;
pub use types::Config;
