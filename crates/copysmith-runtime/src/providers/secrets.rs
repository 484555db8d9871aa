//! Secure credential handling for providers.
//!
//! One place for API-key loading and storage so every provider behaves the
//! same way:
//!
//! - **No accidental logging**: credentials never appear in Debug/Display output
//! - **Memory safety**: credentials are zeroed on drop
//! - **Explicit exposure**: the raw value only leaves via `.expose()`
//!
//! ## Usage
//!
//! ```ignore
//! use crate::providers::secrets::{ApiCredential, CredentialSource};
//!
//! // Load from environment
//! let cred = ApiCredential::from_env("GROQ_API_KEY", "groq")?;
//!
//! // Load from config with env fallback
//! let cred = ApiCredential::from_config_or_env(&config, "api_key", "GROQ_API_KEY", "groq")?;
//!
//! // Use in an HTTP header (explicit exposure)
//! request.bearer_auth(cred.expose());
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value as JsonValue;

use super::ProviderError;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from configuration JSON
    Config,
    /// Loaded from an environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// Debug and Display both render `[REDACTED]`; the raw value is only
/// reachable through [`ApiCredential::expose`], called at the point of use.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Wrap a raw value. After this point it cannot be logged by accident.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    pub fn from_env(env_var: &str, name: &'static str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|v| Self::new(v, CredentialSource::Environment, name))
            .map_err(|_| {
                ProviderError::NoCredential(format!(
                    "{name}: set the '{env_var}' environment variable"
                ))
            })
    }

    /// Load from JSON config, falling back to an environment variable.
    ///
    /// Config wins when both are present.
    pub fn from_config_or_env(
        config: &JsonValue,
        config_key: &str,
        env_var: &str,
        name: &'static str,
    ) -> Result<Self, ProviderError> {
        if let Some(value) = config[config_key].as_str() {
            return Ok(Self::new(value, CredentialSource::Config, name));
        }

        if let Ok(value) = std::env::var(env_var) {
            return Ok(Self::new(value, CredentialSource::Environment, name));
        }

        Err(ProviderError::NoCredential(format!(
            "{name}: set '{config_key}' in config or the {env_var} environment variable"
        )))
    }

    /// Check whether a credential is available without loading it.
    ///
    /// The chain uses this to filter providers silently; absence is not an
    /// error condition.
    pub fn is_available(config: &JsonValue, config_key: &str, env_var: &str) -> bool {
        let in_config = config[config_key]
            .as_str()
            .is_some_and(|v| !v.trim().is_empty());
        let in_env = std::env::var(env_var).is_ok_and(|v| !v.trim().is_empty());
        in_config || in_env
    }

    /// Expose the raw value for an API call.
    ///
    /// Only call this where the credential is actually used (an HTTP
    /// header); never store the exposed value.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().trim().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Human-readable name, for error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} [REDACTED]", self.name, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_redacted_in_debug() {
        let secret = "gsk-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Programmatic, "test");

        let debug = format!("{:?}", cred);
        assert!(!debug.contains(secret), "secret exposed in Debug!");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_credential_redacted_in_display() {
        let secret = "gsk-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Config, "test");

        let display = format!("{}", cred);
        assert!(!display.contains(secret), "secret exposed in Display!");
        assert!(display.contains("[REDACTED]"));
        assert!(display.contains("config"));
    }

    #[test]
    fn test_credential_expose() {
        let secret = "gsk-super-secret-key-12345";
        let cred = ApiCredential::new(secret, CredentialSource::Programmatic, "test");
        assert_eq!(cred.expose(), secret);
    }

    #[test]
    fn test_from_config_or_env_prefers_config() {
        let config = serde_json::json!({ "api_key": "config-key" });

        std::env::set_var("COPYSMITH_TEST_KEY_PRIORITY", "env-key");
        let cred = ApiCredential::from_config_or_env(
            &config,
            "api_key",
            "COPYSMITH_TEST_KEY_PRIORITY",
            "test",
        )
        .unwrap();

        assert_eq!(cred.expose(), "config-key");
        assert_eq!(cred.source(), CredentialSource::Config);

        std::env::remove_var("COPYSMITH_TEST_KEY_PRIORITY");
    }

    #[test]
    fn test_from_config_or_env_falls_back_to_env() {
        let config = serde_json::json!({});

        std::env::set_var("COPYSMITH_TEST_KEY_FALLBACK", "env-key");
        let cred = ApiCredential::from_config_or_env(
            &config,
            "api_key",
            "COPYSMITH_TEST_KEY_FALLBACK",
            "test",
        )
        .unwrap();

        assert_eq!(cred.expose(), "env-key");
        assert_eq!(cred.source(), CredentialSource::Environment);

        std::env::remove_var("COPYSMITH_TEST_KEY_FALLBACK");
    }

    #[test]
    fn test_from_config_or_env_error_when_missing() {
        let config = serde_json::json!({});

        let result = ApiCredential::from_config_or_env(
            &config,
            "api_key",
            "COPYSMITH_NONEXISTENT_VAR_12345",
            "test",
        );

        assert!(matches!(result, Err(ProviderError::NoCredential(_))));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("api_key"));
        assert!(err.contains("COPYSMITH_NONEXISTENT_VAR_12345"));
    }

    #[test]
    fn test_is_available() {
        let config = serde_json::json!({ "api_key": "value" });
        assert!(ApiCredential::is_available(
            &config,
            "api_key",
            "COPYSMITH_NONEXISTENT_VAR"
        ));
        assert!(!ApiCredential::is_available(
            &serde_json::json!({}),
            "api_key",
            "COPYSMITH_NONEXISTENT_VAR"
        ));
    }

    #[test]
    fn test_blank_values_do_not_count_as_available() {
        let config = serde_json::json!({ "api_key": "   " });
        assert!(!ApiCredential::is_available(
            &config,
            "api_key",
            "COPYSMITH_NONEXISTENT_VAR"
        ));
    }
}
