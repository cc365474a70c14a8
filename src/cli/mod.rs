//! Command-line interface definition and dispatch for terminai.
//!
//! Uses [`clap`] for argument parsing with derive macros. Flags are checked
//! in priority order (help, list, select, info) and anything else is treated
//! as a prompt. Handlers live in the [`commands`] submodule.

mod commands;
mod prompt;

use anyhow::Result;
use clap::Parser;

use crate::config::{self, ConfigStore};
use crate::context::{Context, Endpoints};
use crate::credentials::Credentials;

/// Top-level CLI structure for terminai.
///
/// The built-in help flag is disabled so `-h`/`--help` print the tool's own
/// usage text.
#[derive(Parser, Debug)]
#[command(
    name = "ai",
    about = "Send a prompt or piped command output to an LLM",
    disable_help_flag = true
)]
pub struct Cli {
    /// Display this help message
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// List all available models from OpenAI and Anthropic
    #[arg(long)]
    pub list_models: bool,

    /// Choose a specific model to use for LLM interactions
    #[arg(long, value_name = "MODEL_NAME", num_args = 0..=1)]
    pub select_model: Option<Option<String>>,

    /// Show the current LLM provider and model being used
    #[arg(long)]
    pub info: bool,

    /// Prompt text, or instructions when input is piped
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI to its handler.
///
/// Credentials are resolved before anything but help runs, so a missing key
/// stops every provider-facing command up front.
pub async fn run(cli: Cli) -> Result<()> {
    if cli.help {
        commands::print_usage();
        return Ok(());
    }

    let credentials = Credentials::resolve(&config::env_file_path()?)?;
    let ctx = Context::new(credentials, ConfigStore::open_default()?, Endpoints::from_env())?;

    if cli.list_models {
        return commands::list_models(&ctx).await;
    }

    if let Some(requested) = cli.select_model {
        match requested {
            Some(model) => commands::select_model(&ctx, &model).await?,
            None => println!("Error: No model specified after --select-model"),
        }
        return Ok(());
    }

    if cli.info {
        commands::print_info(&ctx);
        return Ok(());
    }

    let piped = prompt::read_piped_stdin()?;
    let prompt = prompt::build_prompt(piped.as_deref(), &cli.prompt);
    if prompt.is_empty() {
        commands::print_short_usage();
        return Ok(());
    }

    commands::ask(&ctx, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_prompt_words_are_collected() {
        let cli = parse_from(&["ai", "explain", "this", "error"]);
        assert_eq!(cli.prompt, vec!["explain", "this", "error"]);
        assert!(!cli.help && !cli.list_models && !cli.info);
        assert!(cli.select_model.is_none());
    }

    #[test]
    fn test_select_model_with_and_without_value() {
        let cli = parse_from(&["ai", "--select-model", "gpt-4o"]);
        assert_eq!(cli.select_model, Some(Some("gpt-4o".to_string())));

        let cli = parse_from(&["ai", "--select-model"]);
        assert_eq!(cli.select_model, Some(None));
    }

    #[test]
    fn test_short_and_long_help() {
        assert!(parse_from(&["ai", "-h"]).help);
        assert!(parse_from(&["ai", "--help"]).help);
    }

    #[test]
    fn test_flags() {
        assert!(parse_from(&["ai", "--list-models"]).list_models);
        assert!(parse_from(&["ai", "--info"]).info);
    }

    #[test]
    fn test_prompt_may_start_with_a_dash() {
        let cli = parse_from(&["ai", "-la", "explain"]);
        assert_eq!(cli.prompt, vec!["-la", "explain"]);
        assert!(!cli.help && !cli.list_models && !cli.info);

        let cli = parse_from(&["ai", "explain", "ls", "-la"]);
        assert_eq!(cli.prompt, vec!["explain", "ls", "-la"]);
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse_from(&["ai"]);
        assert!(cli.prompt.is_empty());
    }
}
