//! The template bank: static per-category copy used for local synthesis.
//!
//! The bank is process-lifetime constant state. There are no writers, so no
//! locking is needed; every request reads the same entries. Templates embed
//! the generic phrases the customizer knows how to substitute
//! ("business owners", "entrepreneurs", "AI platform", "our platform").
//!
//! Each category keeps its entries in a meaningful order:
//! index 0 reads formal, index 1 reads conversational, index 2 leans on
//! urgency. The selector depends on that ordering.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::types::ContentCategory;

/// Startup validation failures for the template bank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateBankError {
    #[error("no templates registered for category '{0}'")]
    EmptyCategory(ContentCategory),

    #[error("empty template at index {index} in category '{category}'")]
    EmptyEntry {
        category: ContentCategory,
        index: usize,
    },
}

lazy_static! {
    // BTreeMap keeps iteration deterministic.
    static ref TEMPLATE_BANK: BTreeMap<ContentCategory, Vec<&'static str>> = {
        let mut bank = BTreeMap::new();

        bank.insert(ContentCategory::AdCopy, vec![
            "Ready to take your operations to the next level? Our platform helps \
             business owners streamline daily work, reach more customers, and grow \
             revenue without the overhead. Trusted by teams that demand results. \
             Start your free trial today and see the difference within a week.",
            "Hey entrepreneurs! Tired of juggling ten tools just to keep the lights \
             on? Our platform pulls everything into one place so you can spend less \
             time on busywork and more time doing what you love. Give it a spin — \
             your future self will thank you.",
            "Don't wait — this offer won't last! Business owners everywhere are \
             switching to our AI platform and cutting hours off their week. Lock in \
             your discount before the deadline passes and join thousands who already \
             made the move. Act now!",
        ]);

        bank.insert(ContentCategory::Email, vec![
            "Subject: A better way to run your week\n\nHi there,\n\nWe built our \
             platform for business owners who are done losing evenings to manual \
             work. In a few minutes you can automate the tasks that eat your day \
             and get back to the work that matters. Reply to this email or start a \
             free trial — we'd love to show you around.\n\nBest,\nThe Team",
            "Subject: Quick question\n\nHey!\n\nEver feel like the admin side of \
             things runs you, instead of the other way around? You're not alone — \
             most entrepreneurs we talk to say the same. Our platform takes the \
             boring parts off your plate. Want to see how? Just hit reply.\n\nCheers",
            "Subject: Last chance — doors close tonight\n\nHi,\n\nThis is it: the \
             special pricing for our platform ends at midnight. Entrepreneurs who \
             joined last month are already saving hours every week, and tonight is \
             your final window to get the same deal. Grab your spot before it \
             expires.\n\nTalk soon",
        ]);

        bank.insert(ContentCategory::Social, vec![
            "Running a company is hard. Your software shouldn't be. Our platform \
             gives business owners one clean dashboard for everything — projects, \
             invoices, campaigns. Less chaos, more momentum. #productivity \
             #smallbusiness",
            "POV: you finally found a tool that just works. Entrepreneurs, meet our \
             platform — the friendly sidekick that handles the busywork while you \
             build the dream. Link in bio!",
            "48 hours left! Launch pricing for our platform disappears this weekend. \
             Business owners: this is the sign you were waiting for. Tap the link \
             before it's gone.",
        ]);

        bank.insert(ContentCategory::Landing, vec![
            "Everything your company needs. Nothing it doesn't.\n\nOur platform \
             brings operations, marketing, and finances into a single workspace \
             built for business owners. No steep learning curve, no bloated feature \
             lists — just the tools you need to grow, backed by support that \
             actually answers.\n\nStart free. Upgrade when you're ready.",
            "Work smarter. Stress less.\n\nEntrepreneurs use our platform to turn \
             scattered to-do lists into a single, friendly workflow. Set it up in \
             minutes, invite your team, and watch the busywork melt away.\n\nTry it \
             free — no credit card required.",
            "The clock is ticking on doing things the hard way.\n\nEvery week \
             without our platform is hours lost to manual work. Business owners who \
             switch save an average of six hours a week from day one. Limited-time \
             launch pricing ends soon — claim yours today.",
        ]);

        bank.insert(ContentCategory::General, vec![
            "Our platform is built to help business owners do more with less: fewer \
             tabs, fewer spreadsheets, fewer late nights. Whatever you're working \
             on, start with a tool that keeps everything in one place and gets out \
             of your way.",
            "Think of our AI platform as the teammate who never drops the ball. \
             Entrepreneurs rely on it to remember the details, chase the \
             follow-ups, and keep projects moving — so nothing slips through the \
             cracks.",
            "Time waits for no one, and neither does your to-do list. Our platform \
             helps business owners turn a mountain of tasks into a clear plan for \
             the week. Start today; your next deadline will never see you coming.",
        ]);

        bank
    };
}

/// Templates for a category.
///
/// Falls back to the `General` list when the requested category has no
/// entry registered, so callers always get a usable list.
pub fn templates_for(category: ContentCategory) -> &'static [&'static str] {
    TEMPLATE_BANK
        .get(&category)
        .or_else(|| TEMPLATE_BANK.get(&ContentCategory::General))
        .map(|list| list.as_slice())
        .unwrap_or(&[])
}

/// Validate the bank at startup.
///
/// Every known category must carry at least one non-empty entry; otherwise
/// the no-provider path could produce empty output, which callers must never
/// see. Gateways call this once at construction and fail fast.
pub fn validate() -> Result<(), TemplateBankError> {
    for category in ContentCategory::ALL {
        let list = TEMPLATE_BANK
            .get(&category)
            .ok_or(TemplateBankError::EmptyCategory(category))?;
        if list.is_empty() {
            return Err(TemplateBankError::EmptyCategory(category));
        }
        for (index, entry) in list.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(TemplateBankError::EmptyEntry { category, index });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_every_category_has_three_entries() {
        // The selector's urgency rule needs index 2 and the casual rule
        // needs index 1; the bank ships three entries everywhere.
        for category in ContentCategory::ALL {
            assert_eq!(templates_for(category).len(), 3, "category {category}");
        }
    }

    #[test]
    fn test_templates_embed_substitutable_phrases() {
        for category in ContentCategory::ALL {
            for entry in templates_for(category) {
                let lowered = entry.to_lowercase();
                assert!(
                    lowered.contains("business owners") || lowered.contains("entrepreneurs"),
                    "missing audience phrase in {category}"
                );
                assert!(
                    lowered.contains("our platform") || lowered.contains("ai platform"),
                    "missing product phrase in {category}"
                );
            }
        }
    }

    #[test]
    fn test_lookup_returns_same_slice_each_time() {
        let first = templates_for(ContentCategory::Email);
        let second = templates_for(ContentCategory::Email);
        assert_eq!(first, second);
    }
}
