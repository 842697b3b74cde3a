//! triage - Structured triage summaries from plaintext medical records
//!
//! Entry point for the triage CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use triage::cli::{Cli, Commands};
use triage::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            triage::cli::completions::print(shell);
        }
        Commands::Models => {
            triage::cli::commands::list_models()?;
        }
        command => {
            // Load configuration only for commands that use it.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize(args) => {
                    triage::cli::commands::summarize(&settings, args).await?;
                }
                Commands::Config(config_cmd) => {
                    triage::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Models => unreachable!(),
            }
        }
    }

    Ok(())
}
