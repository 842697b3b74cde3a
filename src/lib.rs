//! triage - Structured triage summaries from plaintext medical records
//!
//! Reads a record, asks a chat-completion model to reformat it into a fixed
//! three-tier summary and reports the token usage and estimated cost.

pub mod cli;
pub mod config;
pub mod llm;
pub mod model;
pub mod storage;
pub mod usage;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for triage
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported file type '{}': only .txt files are supported", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("OPENAI_API_KEY is not set (environment or llm.api_key in config)")]
    CredentialMissing,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
