//! Configuration module for triage
//!
//! Handles loading settings from a TOML file and resolving the API
//! credential.

mod credentials;
mod settings;

pub use credentials::{
    CredentialChain, CredentialProvider, EnvCredential, SettingsCredential, OPENAI_API_KEY_ENV,
};
pub use settings::Settings;
