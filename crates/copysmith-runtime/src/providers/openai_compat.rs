//! Generic adapter for OpenAI-compatible chat-completion endpoints.
//!
//! Every builtin provider accepts `{model, messages, max_tokens, temperature}`
//! and returns its generated text in the first choice's message content, so
//! one adapter parameterized by endpoint + model + credential covers them all.
//!
//! ## Security
//!
//! The API key is stored as an [`ApiCredential`] and only exposed when the
//! Authorization header is written.

use std::sync::OnceLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use copysmith_core::GenerationRequest;

use super::{
    secrets::ApiCredential, ChatMessage, ProviderError, TextProvider,
};
use crate::chain::ProviderSpec;
use crate::config::GatewayConfig;
use crate::prompts::instruction_for;

/// One OpenAI-compatible provider slot, bound to its credential.
pub struct OpenAiCompatProvider {
    name: &'static str,
    endpoint: &'static str,
    model: &'static str,
    credential: ApiCredential,
}

impl std::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("credential", &self.credential)
            .finish()
    }
}

impl OpenAiCompatProvider {
    /// Bind a provider slot to a loaded credential.
    pub fn new(spec: &ProviderSpec, credential: ApiCredential) -> Self {
        Self {
            name: spec.name,
            endpoint: spec.endpoint,
            model: spec.model,
            credential,
        }
    }

    /// Load the slot's credential from the environment.
    pub fn from_env(spec: &ProviderSpec) -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(spec.env_var, spec.name)?;
        Ok(Self::new(spec, credential))
    }

    fn http_client() -> &'static reqwest::Client {
        static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
        CLIENT.get_or_init(|| {
            reqwest::Client::builder()
                .build()
                .expect("Failed to build HTTP client")
        })
    }
}

/// Chat-completion request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// Chat-completion response body. Only the text is of interest.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl TextProvider for OpenAiCompatProvider {
    async fn attempt(
        &self,
        request: &GenerationRequest,
        config: &GatewayConfig,
    ) -> Result<String, ProviderError> {
        if self.credential.is_empty() {
            return Err(ProviderError::NoCredential(self.name.to_string()));
        }

        let body = CompletionRequest {
            model: self.model,
            messages: vec![
                ChatMessage::system(instruction_for(request.category)),
                ChatMessage::user(request.prompt.as_str()),
            ],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        // Credential exposed only here, at the point of use.
        let response = Self::http_client()
            .post(self.endpoint)
            .bearer_auth(self.credential.expose())
            .timeout(config.timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ProviderError::MalformedPayload(
                "response contained no generated text".to_string(),
            ));
        }

        Ok(content)
    }

    fn name(&self) -> &str {
        self.name
    }
}
