//! Placeholder substitution over a selected template.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::types::ExtractedFields;

lazy_static! {
    /// Generic audience phrases embedded in templates.
    static ref AUDIENCE_PLACEHOLDER: Regex =
        Regex::new(r"(?i)business owners|entrepreneurs").unwrap();

    /// Generic product phrases embedded in templates.
    static ref PRODUCT_PLACEHOLDER: Regex =
        Regex::new(r"(?i)AI platform|our platform").unwrap();
}

/// Substitute extracted fields into the template's generic phrases.
///
/// Replacement is case-insensitive and whole-corpus: every occurrence of a
/// placeholder phrase is rewritten. A field that was not extracted leaves
/// its placeholder untouched. `benefits` is carried on [`ExtractedFields`]
/// but substituted nowhere.
///
/// The input template is never mutated; callers get a fresh string.
pub fn customize(template: &str, fields: &ExtractedFields) -> String {
    let mut text = template.to_string();

    if let Some(audience) = &fields.target_audience {
        text = AUDIENCE_PLACEHOLDER
            .replace_all(&text, NoExpand(audience.as_str()))
            .into_owned();
    }
    if let Some(product) = &fields.product {
        text = PRODUCT_PLACEHOLDER
            .replace_all(&text, NoExpand(product.as_str()))
            .into_owned();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(audience: Option<&str>, product: Option<&str>) -> ExtractedFields {
        ExtractedFields {
            target_audience: audience.map(str::to_string),
            product: product.map(str::to_string),
            benefits: None,
        }
    }

    #[test]
    fn test_substitutes_audience_phrases() {
        let out = customize(
            "Built for business owners. Entrepreneurs love it.",
            &fields(Some("busy parents"), None),
        );
        assert_eq!(out, "Built for busy parents. busy parents love it.");
    }

    #[test]
    fn test_substitutes_product_phrases() {
        let out = customize(
            "Our platform does the work. An AI platform you can trust.",
            &fields(None, Some("meal-kit app")),
        );
        assert_eq!(out, "meal-kit app does the work. An meal-kit app you can trust.");
    }

    #[test]
    fn test_missing_field_leaves_placeholder() {
        let template = "Our platform helps business owners.";
        let out = customize(template, &fields(None, None));
        assert_eq!(out, template);
    }

    #[test]
    fn test_replacement_is_case_insensitive() {
        let out = customize(
            "BUSINESS OWNERS and Business Owners",
            &fields(Some("founders"), None),
        );
        assert_eq!(out, "founders and founders");
    }

    #[test]
    fn test_replacement_text_is_literal() {
        // Field values containing regex capture syntax must not expand.
        let out = customize("for business owners", &fields(Some("$1 people"), None));
        assert_eq!(out, "for $1 people");
    }

    #[test]
    fn test_benefits_are_not_substituted() {
        let fields = ExtractedFields {
            target_audience: None,
            product: None,
            benefits: Some("saves time".to_string()),
        };
        let template = "Our platform helps business owners.";
        assert_eq!(customize(template, &fields), template);
    }

    #[test]
    fn test_template_is_not_mutated() {
        let template = "Our platform for business owners.";
        let _ = customize(template, &fields(Some("parents"), Some("the app")));
        assert_eq!(template, "Our platform for business owners.");
    }
}
