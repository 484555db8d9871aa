//! The generation gateway: provider chain first, local synthesis on total
//! failure.
//!
//! `generate` is the single inbound surface. It never fails and never
//! returns an empty string: either some provider supplied content, or the
//! deterministic engine in `copysmith-core` did. Callers cannot tell the two
//! apart without reading logs, and that is deliberate.

use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::info;

use copysmith_core::{synthesize, templates, GenerationRequest, TemplateBankError};

use crate::chain::ProviderChain;
use crate::config::GatewayConfig;

/// Errors surfaced only at construction time.
///
/// `generate` itself never fails; the one fatal condition (a template bank
/// that could produce empty output) is caught here, before any request runs.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("template bank invalid: {0}")]
    TemplateBank(#[from] TemplateBankError),

    #[error("invalid gateway configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Always-answering content gateway.
pub struct Gateway {
    chain: ProviderChain,
    config: GatewayConfig,
}

impl Gateway {
    /// Build a gateway over an explicit chain and configuration.
    ///
    /// Fails fast if the template bank cannot back the no-provider path.
    pub fn new(chain: ProviderChain, config: GatewayConfig) -> Result<Self, GatewayError> {
        templates::validate()?;
        Ok(Self { chain, config })
    }

    /// Build a gateway from the process environment with default settings.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(ProviderChain::from_env(), GatewayConfig::default())
    }

    /// Build a gateway from a JSON configuration object.
    ///
    /// Settings come from the object's top-level fields; provider
    /// credentials from `providers.<name>.api_key`, with environment
    /// fallback per provider.
    pub fn from_config(config: &JsonValue) -> Result<Self, GatewayError> {
        let settings: GatewayConfig = serde_json::from_value(config.clone())?;
        Self::new(ProviderChain::from_config(config), settings)
    }

    /// Names of the providers that will be attempted, in order.
    pub fn configured_providers(&self) -> Vec<&str> {
        self.chain.provider_names()
    }

    /// Generate content for a prompt.
    ///
    /// Unknown category strings are treated as `general`. The chain gets one
    /// pass (one bounded attempt per configured provider); on total failure
    /// the local synthesis engine supplies the result, so the return value
    /// is always non-empty.
    pub async fn generate(&self, prompt: &str, category: &str) -> String {
        let request = GenerationRequest::new(prompt, category);

        if let Some(content) = self.chain.first_success(&request, &self.config).await {
            return content;
        }

        info!(
            category = %request.category,
            "all provider attempts failed, using local synthesis"
        );
        synthesize(&request.prompt, request.category)
    }
}
