//! The ordered provider chain.
//!
//! The chain is a fixed, priority-ordered list of provider handles. Each
//! request walks it once: one bounded attempt per provider, first non-empty
//! content wins, any failure falls through to the next handle. Providers
//! without a credential are filtered out when the chain is built: skipped,
//! never attempted, not an error.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use copysmith_core::GenerationRequest;

use crate::config::GatewayConfig;
use crate::providers::{
    secrets::{ApiCredential, CredentialSource},
    OpenAiCompatProvider, TextProvider,
};

/// Static description of one builtin provider slot.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSpec {
    /// Identifier used in logs and config keys.
    pub name: &'static str,

    /// Environment variable holding the API key.
    pub env_var: &'static str,

    /// Chat-completions endpoint.
    pub endpoint: &'static str,

    /// Model requested from this provider.
    pub model: &'static str,

    /// Chain position; lower is attempted first.
    pub priority: u8,
}

/// Builtin provider table, in fixed priority order.
///
/// All four speak the OpenAI-compatible chat wire shape.
pub const BUILTIN_PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        name: "groq",
        env_var: "GROQ_API_KEY",
        endpoint: "https://api.groq.com/openai/v1/chat/completions",
        model: "llama-3.3-70b-versatile",
        priority: 0,
    },
    ProviderSpec {
        name: "openrouter",
        env_var: "OPENROUTER_API_KEY",
        endpoint: "https://openrouter.ai/api/v1/chat/completions",
        model: "meta-llama/llama-3.3-70b-instruct",
        priority: 1,
    },
    ProviderSpec {
        name: "together",
        env_var: "TOGETHER_API_KEY",
        endpoint: "https://api.together.xyz/v1/chat/completions",
        model: "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        priority: 2,
    },
    ProviderSpec {
        name: "mistral",
        env_var: "MISTRAL_API_KEY",
        endpoint: "https://api.mistral.ai/v1/chat/completions",
        model: "mistral-small-latest",
        priority: 3,
    },
];

/// Priority-ordered list of usable provider handles.
///
/// An empty chain is a valid state; the gateway then goes straight to local
/// synthesis.
pub struct ProviderChain {
    providers: Vec<Arc<dyn TextProvider>>,
}

impl ProviderChain {
    /// Build the chain from the process environment.
    ///
    /// Builtin slots whose env var is unset or blank are skipped silently.
    pub fn from_env() -> Self {
        Self::from_lookup(|env_var| std::env::var(env_var).ok())
    }

    /// Build the chain from JSON configuration with environment fallback.
    ///
    /// Credentials are read from `config["providers"][name]["api_key"]`,
    /// falling back to each slot's env var. Slots with neither are skipped.
    pub fn from_config(config: &JsonValue) -> Self {
        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();
        for spec in specs_by_priority() {
            let slot_config = &config["providers"][spec.name];
            if !ApiCredential::is_available(slot_config, "api_key", spec.env_var) {
                debug!(provider = spec.name, "no credential, provider skipped");
                continue;
            }
            match ApiCredential::from_config_or_env(slot_config, "api_key", spec.env_var, spec.name)
            {
                Ok(credential) => {
                    providers.push(Arc::new(OpenAiCompatProvider::new(spec, credential)));
                }
                Err(error) => {
                    warn!(provider = spec.name, %error, "skipping provider");
                }
            }
        }
        debug!(count = providers.len(), "provider chain assembled");
        Self { providers }
    }

    /// Build the chain from an explicit provider list.
    ///
    /// The injection seam for embedders and tests; order is attempt order.
    pub fn with_providers(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { providers }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();
        for spec in specs_by_priority() {
            match lookup(spec.env_var) {
                Some(key) if !key.trim().is_empty() => {
                    let credential =
                        ApiCredential::new(key, CredentialSource::Environment, spec.name);
                    providers.push(Arc::new(OpenAiCompatProvider::new(spec, credential)));
                    debug!(provider = spec.name, "provider configured");
                }
                _ => debug!(provider = spec.name, "no credential, provider skipped"),
            }
        }
        Self { providers }
    }

    /// Number of providers that will be attempted.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no usable providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in attempt order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Try each provider once, in order; first non-empty content wins.
    ///
    /// Transport failures, error statuses, and malformed payloads all fall
    /// through identically: a warning is logged and the next provider gets
    /// its single attempt. `None` means the whole chain is exhausted.
    pub async fn first_success(
        &self,
        request: &GenerationRequest,
        config: &GatewayConfig,
    ) -> Option<String> {
        for provider in &self.providers {
            match provider.attempt(request, config).await {
                Ok(content) => {
                    debug!(provider = provider.name(), "provider attempt succeeded");
                    return Some(content);
                }
                Err(reason) => {
                    warn!(
                        provider = provider.name(),
                        %reason,
                        "provider attempt failed, trying next"
                    );
                }
            }
        }
        None
    }
}

fn specs_by_priority() -> Vec<&'static ProviderSpec> {
    let mut specs: Vec<&ProviderSpec> = BUILTIN_PROVIDERS.iter().collect();
    specs.sort_by_key(|spec| spec.priority);
    specs
}
