//! CLI module for triage
//!
//! Contains argument parsing, console prompts and command implementations.

pub mod args;
pub mod commands;
pub mod completions;
pub mod interactive;

pub use args::{Cli, Commands, ConfigCommand, SummarizeArgs};
