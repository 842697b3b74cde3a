//! Token usage and cost accounting
//!
//! Counts tokens with the model's BPE scheme and turns counts into an
//! estimated USD cost for the post-run report.

mod pricing;
mod report;
mod tokens;

pub use pricing::{estimate_cost, price_for, PricePer1k};
pub use report::{format_report, UsageReport, SIMULATION_NOTICE};
pub use tokens::{count_tokens, Tokenizer};
