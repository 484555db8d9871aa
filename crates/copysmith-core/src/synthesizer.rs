//! Deterministic fallback synthesis.
//!
//! This is the path taken when every provider attempt fails (or none is
//! configured): classify the prompt, pick a template, pull fields out of the
//! prompt, substitute them in. No network, no clock, no shared mutable
//! state: same input always produces the same output.

use crate::classifier::classify;
use crate::customizer::customize;
use crate::selector::select_template;
use crate::types::{ContentCategory, ExtractedFields};

/// Produce final copy for a prompt without any network involvement.
///
/// Given a valid template bank the result is always non-empty.
pub fn synthesize(prompt: &str, category: ContentCategory) -> String {
    let signals = classify(prompt);
    let template = select_template(category, &signals, prompt);
    let fields = ExtractedFields::from_prompt(prompt);
    customize(template, &fields)
}
