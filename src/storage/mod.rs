//! Record storage for triage
//!
//! Resolves per-patient input and output paths and moves text in and out of
//! them.

mod records;

pub use records::{input_path, load_record, output_path, save_summary, RECORD_EXTENSION};
