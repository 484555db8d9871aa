//! Core value types shared across Copysmith.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content category selecting the template list and the instruction framing
/// sent to providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentCategory {
    AdCopy,
    Email,
    Social,
    Landing,
    General,
}

impl ContentCategory {
    /// All known categories, in a fixed order.
    pub const ALL: [ContentCategory; 5] = [
        ContentCategory::AdCopy,
        ContentCategory::Email,
        ContentCategory::Social,
        ContentCategory::Landing,
        ContentCategory::General,
    ];

    /// Parse a caller-supplied category string.
    ///
    /// Matching is case-sensitive; any unrecognized value maps to `General`.
    /// This is total and never fails.
    pub fn parse(value: &str) -> Self {
        match value {
            "ad-copy" => ContentCategory::AdCopy,
            "email" => ContentCategory::Email,
            "social" => ContentCategory::Social,
            "landing" => ContentCategory::Landing,
            _ => ContentCategory::General,
        }
    }

    /// The canonical wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::AdCopy => "ad-copy",
            ContentCategory::Email => "email",
            ContentCategory::Social => "social",
            ContentCategory::Landing => "landing",
            ContentCategory::General => "general",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generation request. Immutable, created per call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Free-text brief from the caller.
    pub prompt: String,

    /// Resolved content category.
    pub category: ContentCategory,
}

impl GenerationRequest {
    /// Build a request from the caller's raw prompt and category string.
    pub fn new(prompt: impl Into<String>, category: &str) -> Self {
        Self {
            prompt: prompt.into(),
            category: ContentCategory::parse(category),
        }
    }
}

/// Keyword signals derived from a single prompt.
///
/// Derived fresh per request, never cached or shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicSignals {
    pub urgency: bool,
    pub professional: bool,
    pub casual: bool,
}

/// Marker-delimited fields pulled out of a structured prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub target_audience: Option<String>,

    pub product: Option<String>,

    /// Extracted for completeness; not substituted into any template.
    pub benefits: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(ContentCategory::parse("ad-copy"), ContentCategory::AdCopy);
        assert_eq!(ContentCategory::parse("email"), ContentCategory::Email);
        assert_eq!(ContentCategory::parse("social"), ContentCategory::Social);
        assert_eq!(ContentCategory::parse("landing"), ContentCategory::Landing);
        assert_eq!(ContentCategory::parse("general"), ContentCategory::General);
    }

    #[test]
    fn test_parse_unknown_maps_to_general() {
        assert_eq!(ContentCategory::parse(""), ContentCategory::General);
        assert_eq!(ContentCategory::parse("blog"), ContentCategory::General);
        assert_eq!(ContentCategory::parse("adcopy"), ContentCategory::General);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Matching is exact; differently-cased values fall through to General.
        assert_eq!(ContentCategory::parse("Ad-Copy"), ContentCategory::General);
        assert_eq!(ContentCategory::parse("EMAIL"), ContentCategory::General);
    }

    #[test]
    fn test_display_round_trips() {
        for category in ContentCategory::ALL {
            assert_eq!(ContentCategory::parse(category.as_str()), category);
        }
    }

    #[test]
    fn test_request_resolves_category() {
        let request = GenerationRequest::new("write something", "social");
        assert_eq!(request.category, ContentCategory::Social);

        let request = GenerationRequest::new("write something", "unknown");
        assert_eq!(request.category, ContentCategory::General);
    }
}
