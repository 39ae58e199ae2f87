//! Fallback chain for single-seat slots.
//!
//! When a single-seat slot's pool has no top-tier member, the policy's
//! fallback chain may force a specific pick regardless of what the search
//! chose. The first step whose conditions hold decides; if none does,
//! the search result stands. Forced picks are not re-checked against
//! pairwise rules.

use tracing::debug;

use crate::models::Day;
use crate::policy::PriorityPolicy;

/// Applies the single-seat fallback chain to a search result.
///
/// `found` is `None` when the search left the seat empty.
pub fn apply_single_slot_override(
    day: &Day,
    pool: &[String],
    found: Option<Vec<String>>,
    policy: &PriorityPolicy,
) -> Option<Vec<String>> {
    if !day.is_single_seat() {
        return found;
    }
    let in_pool = |id: &str| pool.iter().any(|s| s == id);
    if pool.iter().any(|s| policy.is_top_tier(s)) {
        return found;
    }

    let fired = policy.single_slot_fallbacks.iter().find(|rule| {
        in_pool(&rule.pick)
            && rule.also_present.iter().all(|id| in_pool(id))
            && (!rule.only_when_unresolved || found.is_none())
    });

    match fired {
        Some(rule) => {
            debug!(day = %day.code, pick = %rule.pick, "single-seat fallback fired");
            Some(vec![rule.pick.clone()])
        }
        None => found,
    }
}
