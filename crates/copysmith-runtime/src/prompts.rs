//! Instruction prompts sent with every provider attempt.
//!
//! Each content category maps to one fixed system message. The caller's
//! prompt travels separately as the user message, so these stay static and
//! provider-agnostic.

use copysmith_core::ContentCategory;

/// Ad copy instruction.
pub const AD_COPY_INSTRUCTION: &str = "You are an expert advertising copywriter. \
Create compelling, conversion-focused ad copy content for the brief you are given. \
Keep it punchy, concrete, and centered on one clear call to action.";

/// Marketing email instruction.
pub const EMAIL_INSTRUCTION: &str = "You are an expert email marketer. \
Create compelling, conversion-focused email content for the brief you are given, \
including a subject line. Write like a person, not a brochure.";

/// Social media instruction.
pub const SOCIAL_INSTRUCTION: &str = "You are an expert social media copywriter. \
Create compelling, conversion-focused social content for the brief you are given. \
Keep it short, scannable, and native to the feed.";

/// Landing page instruction.
pub const LANDING_INSTRUCTION: &str = "You are an expert conversion copywriter. \
Create compelling, conversion-focused landing page content for the brief you are \
given: a headline, supporting copy, and a call to action.";

/// General-purpose instruction.
pub const GENERAL_INSTRUCTION: &str = "You are an expert marketing copywriter. \
Create compelling, conversion-focused marketing content for the brief you are given.";

/// The system message for a category.
pub fn instruction_for(category: ContentCategory) -> &'static str {
    match category {
        ContentCategory::AdCopy => AD_COPY_INSTRUCTION,
        ContentCategory::Email => EMAIL_INSTRUCTION,
        ContentCategory::Social => SOCIAL_INSTRUCTION,
        ContentCategory::Landing => LANDING_INSTRUCTION,
        ContentCategory::General => GENERAL_INSTRUCTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_an_instruction() {
        for category in ContentCategory::ALL {
            assert!(!instruction_for(category).is_empty());
        }
    }

    #[test]
    fn test_instructions_are_conversion_focused() {
        for category in ContentCategory::ALL {
            assert!(instruction_for(category).contains("conversion-focused"));
        }
    }
}
