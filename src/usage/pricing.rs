use crate::model::ModelId;
use crate::{Result, TriageError};

/// USD price per 1000 tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePer1k {
    pub input: f64,
    pub output: f64,
}

const FAST_TIER: PricePer1k = PricePer1k {
    input: 0.0005,
    output: 0.001,
};

const CAPABLE_TIER: PricePer1k = PricePer1k {
    input: 0.01,
    output: 0.03,
};

/// Look up the price tier for a model. `None` means the model is selectable
/// but has no published price in the table.
pub fn price_for(model: ModelId) -> Option<PricePer1k> {
    match model {
        ModelId::Gpt35Turbo => Some(FAST_TIER),
        ModelId::Gpt4Turbo | ModelId::Gpt4o => Some(CAPABLE_TIER),
        ModelId::Gpt4 => None,
    }
}

/// Estimate the USD cost of a request, rounded to 5 decimal places.
pub fn estimate_cost(input_tokens: usize, output_tokens: usize, model: ModelId) -> Result<f64> {
    let price = price_for(model).ok_or_else(|| {
        TriageError::UnsupportedModel(format!("{} has no pricing entry", model))
    })?;

    let cost = (input_tokens as f64 / 1000.0) * price.input
        + (output_tokens as f64 / 1000.0) * price.output;

    Ok(round5(cost))
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}
