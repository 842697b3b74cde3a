//! API credential resolution
//!
//! Providers are tried in order and the first non-empty value wins.

use crate::config::Settings;
use crate::{Result, TriageError};

/// Primary credential source.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// A single place an API key may come from.
pub trait CredentialProvider {
    /// Short label used in debug logs.
    fn name(&self) -> &str;

    /// The key, if this source has a non-empty one.
    fn lookup(&self) -> Option<String>;
}

/// Reads the key from an environment variable.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredential {
    fn name(&self) -> &str {
        &self.var
    }

    fn lookup(&self) -> Option<String> {
        std::env::var(&self.var).ok().and_then(non_empty)
    }
}

/// Reads `llm.api_key` from the loaded settings.
pub struct SettingsCredential {
    api_key: String,
}

impl SettingsCredential {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api_key: settings.llm.api_key.clone(),
        }
    }
}

impl CredentialProvider for SettingsCredential {
    fn name(&self) -> &str {
        "llm.api_key"
    }

    fn lookup(&self) -> Option<String> {
        non_empty(self.api_key.clone())
    }
}

/// Ordered list of credential providers.
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialChain {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// `OPENAI_API_KEY`, then `llm.api_key` from the config file.
    pub fn standard(settings: &Settings) -> Self {
        Self::env_then_settings(OPENAI_API_KEY_ENV, settings)
    }

    /// `var` from the environment, then `llm.api_key`.
    pub fn env_then_settings(var: &str, settings: &Settings) -> Self {
        Self::new(vec![
            Box::new(EnvCredential::new(var)),
            Box::new(SettingsCredential::new(settings)),
        ])
    }

    pub fn resolve(&self) -> Result<String> {
        for provider in &self.providers {
            if let Some(key) = provider.lookup() {
                tracing::debug!("Using API key from {}", provider.name());
                return Ok(key);
            }
        }
        Err(TriageError::CredentialMissing)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
