//! Keyword heuristics over the request prompt.
//!
//! Classification is case-insensitive substring containment against three
//! fixed keyword sets. No stemming, no partial matching beyond containment.

use crate::types::HeuristicSignals;

const URGENCY_KEYWORDS: &[&str] = &["urgent", "limited time", "hurry", "deadline", "expires"];

const PROFESSIONAL_KEYWORDS: &[&str] = &["professional", "business", "corporate", "formal"];

const CASUAL_KEYWORDS: &[&str] = &["casual", "friendly", "conversational", "relaxed"];

/// Derive tone signals from a prompt.
///
/// Pure function of the prompt text; never cached across requests.
pub fn classify(prompt: &str) -> HeuristicSignals {
    let lowered = prompt.to_lowercase();
    HeuristicSignals {
        urgency: contains_any(&lowered, URGENCY_KEYWORDS),
        professional: contains_any(&lowered, PROFESSIONAL_KEYWORDS),
        casual: contains_any(&lowered, CASUAL_KEYWORDS),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
