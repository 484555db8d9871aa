//! Runtime configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Knobs applied to every provider attempt.
///
/// Deserializable from the same JSON object that carries provider
/// credentials; unknown keys are ignored and every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Per-attempt timeout in seconds. One unresponsive provider delays
    /// fallback by at most this long.
    pub timeout_seconds: u64,

    /// Maximum tokens requested from each provider.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl GatewayConfig {
    /// The per-attempt timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
