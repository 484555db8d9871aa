//! # copysmith-core
//!
//! Deterministic fallback synthesis for marketing copy.
//!
//! This crate is the local half of the Copysmith gateway: when no external
//! provider produces content, the engine here composes usable copy from a
//! static template bank, keyword heuristics, and field extraction over the
//! caller's prompt.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same prompt and category always produce the same copy
//! 2. **No network calls**: Everything here is local computation
//! 3. **Total**: Synthesis never fails and never returns empty output
//!    (enforced by [`templates::validate`] at gateway startup)
//! 4. **No shared mutable state**: The template bank and keyword sets are
//!    read-only constants, so concurrent requests need no locking
//!
//! ## Example
//!
//! ```rust
//! use copysmith_core::generate_fallback;
//!
//! let copy = generate_fallback(
//!     "Target Audience: busy parents\nProduct: meal-kit app\nBenefits: saves time\nTone: professional",
//!     "ad-copy",
//! );
//! assert!(copy.contains("busy parents"));
//! ```

pub mod classifier;
pub mod customizer;
pub mod extractor;
pub mod selector;
pub mod synthesizer;
pub mod templates;
pub mod types;

// Re-export main entry points at crate root
pub use classifier::classify;
pub use customizer::customize;
pub use extractor::extract_between;
pub use selector::select_template;
pub use synthesizer::synthesize;
pub use templates::{templates_for, TemplateBankError};
pub use types::{ContentCategory, ExtractedFields, GenerationRequest, HeuristicSignals};

/// Generate fallback copy from the caller's raw category string.
///
/// Unknown category strings are treated as `general`; the call is total.
pub fn generate_fallback(prompt: &str, category: &str) -> String {
    synthesize(prompt, ContentCategory::parse(category))
}
