//! LLM module for triage
//!
//! Builds the triage prompt and sends it to a chat-completions backend, or to
//! the offline simulator.

mod client;
mod openai;
mod prompts;
mod simulated;

pub use client::{build_backend, complete, CompletionBackend};
pub use openai::{ChatSampling, OpenAiClient, DEFAULT_OPENAI_ENDPOINT};
pub use prompts::{
    build_prompt, subsection_line, Prompt, Section, NO_INFORMATION, SECTIONS, SUBSECTIONS,
};
pub use simulated::{SimulatedBackend, SIMULATED_SUMMARY};
