//! Template selection policy.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::templates::templates_for;
use crate::types::{ContentCategory, HeuristicSignals};

/// Pick one template for the request.
///
/// Signals are applied in strict priority order: urgency beats professional
/// beats casual. Signal-free prompts rotate through the list via a stable
/// hash of the prompt text, so different briefs see different templates while
/// the same brief always gets the same one.
pub fn select_template(
    category: ContentCategory,
    signals: &HeuristicSignals,
    prompt: &str,
) -> &'static str {
    let list = templates_for(category);
    debug_assert!(!list.is_empty(), "template bank validated at startup");

    let index = if signals.urgency && list.len() >= 3 {
        2
    } else if signals.professional {
        0
    } else if signals.casual && list.len() >= 2 {
        1
    } else {
        rotation_index(prompt, list.len())
    };

    debug!(%category, ?signals, index, "template selected");
    list[index]
}

// DefaultHasher::new() uses fixed keys, so the rotation is stable for a
// given prompt across calls and processes of the same build.
fn rotation_index(prompt: &str, len: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    prompt.hash(&mut hasher);
    (hasher.finish() % len as u64) as usize
}
