use tiktoken_rs::CoreBPE;

use crate::model::ModelId;
use crate::{Result, TriageError};

/// BPE tokenizer bound to one model.
pub struct Tokenizer {
    model: ModelId,
    bpe: CoreBPE,
}

impl Tokenizer {
    pub fn for_model(model: ModelId) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model.as_str()).map_err(|e| {
            tracing::debug!("No tokenizer for {}: {}", model, e);
            TriageError::UnsupportedModel(model.to_string())
        })?;

        Ok(Self { model, bpe })
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Count the tokens in `text` under `model`'s tokenization scheme.
pub fn count_tokens(text: &str, model: ModelId) -> Result<usize> {
    Ok(Tokenizer::for_model(model)?.count(text))
}
