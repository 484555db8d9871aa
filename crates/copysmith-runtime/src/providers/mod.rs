//! Provider abstractions for copysmith-runtime.
//!
//! A provider is one external text-generation service, reachable over HTTPS
//! and addressed by endpoint + credential + model id. Every builtin provider
//! speaks the same OpenAI-compatible chat wire shape, so one adapter covers
//! the whole chain.
//!
//! ## Security
//!
//! All providers use the [`secrets`] module for credential handling. See
//! [`ApiCredential`] for the patterns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use copysmith_core::GenerationRequest;

use crate::config::GatewayConfig;

mod openai_compat;
pub mod secrets;

pub use openai_compat::OpenAiCompatProvider;
pub use secrets::{ApiCredential, CredentialSource};

/// Why a single provider attempt produced no usable content.
///
/// Every variant gets the same treatment from the chain: log and move on to
/// the next provider. None of them is fatal to the overall request.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no credential configured: {0}")]
    NoCredential(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("non-success status: {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// A chat message in the provider wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system" or "user"
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Capability handle for one external text-generation service.
///
/// # Attempt Contract
/// - Exactly one bounded network call per `attempt`; no internal retries
/// - Ordering, fall-through, and fallback live in the chain, not here
/// - `Ok` carries non-empty generated text; anything else is a
///   [`ProviderError`]
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// One bounded generation attempt.
    async fn attempt(
        &self,
        request: &GenerationRequest,
        config: &GatewayConfig,
    ) -> Result<String, ProviderError>;

    /// Provider name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::system("be brief").role, "system");
        assert_eq!(ChatMessage::user("write copy").role, "user");
    }

    #[test]
    fn test_error_display_names_the_cause() {
        assert!(ProviderError::Status(503).to_string().contains("503"));
        assert!(ProviderError::Transport("dns".into())
            .to_string()
            .contains("dns"));
    }
}
