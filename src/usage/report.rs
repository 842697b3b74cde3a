use std::fmt::Write;

use crate::model::ModelId;
use crate::usage::estimate_cost;
use crate::Result;

/// Shown in place of the usage report when no backend call was made.
pub const SIMULATION_NOTICE: &str =
    "Running in simulation mode. No tokens were used and no API calls were made.";

/// Token usage and estimated cost of one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub model: ModelId,
    pub cost: f64,
}

impl UsageReport {
    pub fn new(input_tokens: usize, output_tokens: usize, model: ModelId) -> Result<Self> {
        Ok(Self {
            input_tokens,
            output_tokens,
            model,
            cost: estimate_cost(input_tokens, output_tokens, model)?,
        })
    }
}

/// Render the report shown after a live run.
pub fn format_report(report: &UsageReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Usage details:");
    let _ = writeln!(out, "- Input tokens:  {}", report.input_tokens);
    let _ = writeln!(out, "- Output tokens: {}", report.output_tokens);
    let _ = write!(
        out,
        "- Total cost:    ${} USD (model: {})",
        report.cost, report.model
    );
    out
}
