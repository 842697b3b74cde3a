use async_trait::async_trait;

use crate::config::{CredentialChain, Settings};
use crate::llm::openai::OpenAiClient;
use crate::llm::prompts::Prompt;
use crate::llm::simulated::SimulatedBackend;
use crate::model::ModelId;
use crate::Result;

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &Prompt, model: ModelId) -> Result<String>;
}

/// Pick the backend for this run. Simulation never touches credentials.
pub fn build_backend(settings: &Settings, simulate: bool) -> Result<Box<dyn CompletionBackend>> {
    if simulate {
        return Ok(Box::new(SimulatedBackend));
    }

    let api_key = CredentialChain::standard(settings).resolve()?;
    Ok(Box::new(OpenAiClient::from_settings(settings, api_key)?))
}

/// Generate a summary for `prompt`. The backend's text is returned as is.
pub async fn complete(
    settings: &Settings,
    prompt: &Prompt,
    model: ModelId,
    simulate: bool,
) -> Result<String> {
    let backend = build_backend(settings, simulate)?;
    backend.complete(prompt, model).await
}
