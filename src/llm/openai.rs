use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::CompletionBackend;
use crate::llm::prompts::Prompt;
use crate::model::ModelId;
use crate::{Result, TriageError};

pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChatSampling {
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub max_tokens: u32,
}

impl ChatSampling {
    /// Greedy decoding with neutral penalties and a 1000 token ceiling.
    pub const TRIAGE: ChatSampling = ChatSampling {
        temperature: 0.0,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
        max_tokens: 1000,
    };
}

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        let endpoint = if endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            endpoint.trim().trim_end_matches('/').to_string()
        };

        let http = Client::builder()
            .build()
            .map_err(|e| TriageError::Backend(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint,
        })
    }

    pub fn from_settings(settings: &Settings, api_key: String) -> Result<Self> {
        Self::new(api_key, &settings.llm.endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, prompt: &Prompt, model: ModelId) -> Result<String> {
        let body = ChatCompletionRequest {
            model: model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.as_str(),
            }],
            sampling: ChatSampling::TRIAGE,
        };

        tracing::debug!("POST {} (model {})", self.request_url(), model);

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TriageError::Backend(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TriageError::Backend(format!(
                "backend returned {status}: {detail}"
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TriageError::Backend(format!("failed to parse response: {e}")))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| TriageError::Backend("response did not contain summary text".into()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(flatten)]
    sampling: ChatSampling,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
