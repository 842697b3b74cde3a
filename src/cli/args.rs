//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// triage - Structured triage summaries from plaintext medical records
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize one patient's record (asks for anything not given as a flag)
    Summarize(SummarizeArgs),

    /// List the supported models and their prices
    Models,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct SummarizeArgs {
    /// Model to use (gpt-4-turbo, gpt-3.5-turbo, gpt-4, gpt-4o)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Return the canned summary without calling the API
    #[arg(long, conflicts_with = "live")]
    pub simulate: bool,

    /// Call the API without asking about simulation mode
    #[arg(long)]
    pub live: bool,

    /// Patient ID number (Teudat Zehut), used to locate the record
    #[arg(short, long)]
    pub patient_id: Option<String>,
}

impl SummarizeArgs {
    /// Simulation choice given on the command line, if any.
    pub fn simulation_flag(&self) -> Option<bool> {
        match (self.simulate, self.live) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
