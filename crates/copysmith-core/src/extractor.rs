//! Marker-delimited field extraction from structured prompts.
//!
//! Prompts often arrive in a loose "Target Audience: ...\nProduct: ...\n
//! Benefits: ...\nTone: ..." shape. Extraction pulls the text between two
//! labels without requiring the full set to be present.

use crate::types::ExtractedFields;

/// The substring strictly between the first case-insensitive occurrence of
/// `start_marker` and the first occurrence of `end_marker` after it, trimmed
/// of surrounding whitespace.
///
/// Total for any input: an absent `start_marker` yields an empty string, and
/// an absent `end_marker` yields everything from after `start_marker` to the
/// end of the text. Marker matching is ASCII case-insensitive, which keeps
/// byte offsets into the original text valid.
pub fn extract_between(text: &str, start_marker: &str, end_marker: &str) -> String {
    let haystack = text.to_ascii_lowercase();
    let start_needle = start_marker.to_ascii_lowercase();
    let end_needle = end_marker.to_ascii_lowercase();

    let Some(start_idx) = haystack.find(&start_needle) else {
        return String::new();
    };
    // ASCII lowercasing preserves byte offsets, so indices found in the
    // lowered haystack slice the original text safely.
    let content_start = start_idx + start_needle.len();
    let rest = &text[content_start..];

    let bounded = match haystack[content_start..].find(&end_needle) {
        Some(end_idx) => &rest[..end_idx],
        None => rest,
    };

    bounded.trim().to_string()
}

impl ExtractedFields {
    /// Pull the known fields out of a prompt.
    ///
    /// Each field is bounded by the next recognized label; an empty
    /// extraction becomes `None` so the customizer leaves the matching
    /// placeholder untouched.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            target_audience: non_empty(extract_between(prompt, "target audience:", "product:")),
            product: non_empty(extract_between(prompt, "product:", "benefits:")),
            benefits: non_empty(extract_between(prompt, "benefits:", "tone:")),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
