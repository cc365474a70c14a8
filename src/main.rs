//! Entry point for terminai, a terminal assistant that streams answers from
//! OpenAI or Anthropic.
//!
//! This binary sets up logging, parses CLI arguments via [`cli`], and
//! dispatches to the matching handler.

mod cli;
mod config;
mod constants;
mod context;
mod credentials;
mod error;
mod output;
mod provider;
mod selection;

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the reply.
fn init_logging() {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Runs the terminai CLI.
///
/// A missing-credentials failure prints its remediation text to stdout; any
/// other failure is reported on stderr. Both exit with status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let cli = cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<error::Error>() {
                Some(missing @ error::Error::MissingCredentials { .. }) => println!("{missing}"),
                _ => eprintln!("{} {:#}", "error:".red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}
