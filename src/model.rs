//! Supported completion models

use std::fmt;
use std::str::FromStr;

use crate::TriageError;

/// A backend model the tool knows how to tokenize, price and call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    Gpt4Turbo,
    Gpt35Turbo,
    Gpt4,
    Gpt4o,
}

impl ModelId {
    /// Every supported model, in menu order. The first entry is the default.
    pub const ALL: [ModelId; 4] = [
        ModelId::Gpt4Turbo,
        ModelId::Gpt35Turbo,
        ModelId::Gpt4,
        ModelId::Gpt4o,
    ];

    /// Identifier sent to the backend and used for tokenizer lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Gpt4Turbo => "gpt-4-turbo",
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
            ModelId::Gpt4 => "gpt-4",
            ModelId::Gpt4o => "gpt-4o",
        }
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TriageError::UnsupportedModel(wanted.to_string()))
    }
}
