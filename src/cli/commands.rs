//! Handlers for each command the CLI can dispatch to.

use anyhow::{Context as _, Result};
use colored::Colorize;
use futures::StreamExt;

use crate::context::Context;
use crate::error::Error;
use crate::output::{self, StreamRenderer};
use crate::provider::ProviderKind;
use crate::selection;

const USAGE: &str = "\
Usage:
  ai <prompt>                            Send a prompt to external LLM
  ai --list-models                       List available LLM models
  ai --select-model <model_name>         Select an LLM model to use
  ai --info                              Display current configuration
  ai --help                              Show this help message
  <command> | ai [additional instructions]  Pipe command output to LLM
  ai \"$(command)\" [additional instructions]  Use command output as input

Options:
  --list-models    List all available models from OpenAI and Anthropic
  --select-model   Choose a specific model to use for LLM interactions
  --info           Show the current LLM provider and model being used
  --help, -h       Display this help message";

const SHORT_USAGE: &str = "\
Usage: ai <prompt>
   or: <command> | ai [additional instructions]
   or: ai \"$(command)\" [additional instructions]
   or: ai --list-models
   or: ai --select-model <model_name>
   or: ai --info
   or: ai --help";

pub fn print_usage() {
    println!("{USAGE}");
}

pub fn print_short_usage() {
    println!("{SHORT_USAGE}");
}

fn display_name(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::OpenAI => "OpenAI",
        ProviderKind::Anthropic => "Anthropic",
    }
}

/// Prints every catalog, marking the configured model.
pub async fn list_models(ctx: &Context) -> Result<()> {
    for (i, kind) in ProviderKind::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("==={} models===", display_name(kind)).bold());

        let Some(catalog) = ctx.catalog(kind) else {
            println!("{}", format!("  ({} not set)", kind.api_key_var()).dimmed());
            continue;
        };

        let mut models = catalog.list();
        while let Some(model) = models.next().await {
            let model = model.with_context(|| format!("Failed to list {kind} models"))?;
            let current = ctx.config.provider == kind && ctx.config.model == model;
            if current {
                println!("- {model}{}", " (current)".green());
            } else {
                println!("- {model}");
            }
        }
    }
    Ok(())
}

/// Runs the selection workflow and reports the outcome.
///
/// An unknown model is reported and leaves the configuration as it was; it
/// is not a failure of the command.
pub async fn select_model(ctx: &Context, requested: &str) -> Result<()> {
    match selection::select_model(requested, &ctx.catalogs(), &ctx.store).await {
        Ok(config) => {
            println!("Selected model: {}", config.model.yellow());
            Ok(())
        }
        Err(err @ Error::UnknownModel(_)) => {
            println!("{} {}", "Error:".red().bold(), err);
            Ok(())
        }
        Err(err) => Err(err).context("Failed to select model"),
    }
}

pub fn print_info(ctx: &Context) {
    println!("Current configuration");
    println!("--Provider: {}", ctx.config.provider.to_string().cyan());
    println!("--Model: {}", ctx.config.model.yellow());
    println!(
        "{}",
        format!("--Config: {}", ctx.store.path().display()).dimmed()
    );
}

/// Streams the configured provider's reply to `prompt` to stdout.
pub async fn ask(ctx: &Context, prompt: &str) -> Result<()> {
    let provider = ctx.active_provider()?;
    let model = &ctx.config.model;
    tracing::debug!(
        "prompting {} ({model}) with {} bytes",
        provider.kind(),
        prompt.len()
    );

    let mut renderer = StreamRenderer::stdout();
    let written = output::stream_response(provider.stream(prompt, model), &mut renderer).await?;
    tracing::debug!("rendered {written} fragments");
    Ok(())
}
