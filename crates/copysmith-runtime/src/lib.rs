//! # copysmith-runtime
//!
//! Provider chain and generation gateway for Copysmith.
//!
//! This crate owns everything that touches the network: the builtin table of
//! OpenAI-compatible providers, credential loading, and the [`Gateway`] that
//! walks the chain and falls back to the deterministic engine in
//! `copysmith-core` when every attempt fails.
//!
//! ## Important
//!
//! The gateway degrades, it does not error. A request sees at most one
//! bounded network call per configured provider (no retries, no backoff,
//! no cross-request state) and always comes back with usable copy.
//!
//! ## Example
//!
//! ```rust,ignore
//! use copysmith_runtime::Gateway;
//!
//! let gateway = Gateway::from_env()?;
//! let copy = gateway.generate("Product: meal-kit app", "ad-copy").await;
//! println!("{copy}");
//! ```

pub mod chain;
pub mod config;
pub mod gateway;
pub mod prompts;
pub mod providers;

// Re-export main types at crate root
pub use chain::{ProviderChain, ProviderSpec, BUILTIN_PROVIDERS};
pub use config::GatewayConfig;
pub use gateway::{Gateway, GatewayError};
pub use providers::{
    ApiCredential, ChatMessage, CredentialSource, OpenAiCompatProvider, ProviderError,
    TextProvider,
};
