//! Post-search repair passes.
//!
//! Both passes are single-pass, best-effort adjustments:
//!
//! - **Low-priority repair** (per slot): each deprioritized member of the
//!   found set gets one substitution attempt with the first non-deprioritized,
//!   unassigned pool member. The swap is kept only if the set stays at the
//!   headcount and every rule still holds.
//! - **Paired-slot repair** (across slots): staff assigned to both halves of
//!   a paired shift are replaced in the second half when a candidate not
//!   already in that half keeps it at its headcount. Only staff on both
//!   halves before the pass are considered; a replacement may itself work
//!   the first half. This pass does not re-check pairwise rules, so it can
//!   reintroduce a violation the search had avoided.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{all_satisfied, Day, Rule};
use crate::policy::{PairedDays, PriorityPolicy};

use super::pool::AvailabilityIndex;

/// Tries to replace each deprioritized member of `found`.
///
/// `pool` is the slot's pool in scored order.
pub fn repair_low_priority(
    day: &Day,
    pool: &[String],
    mut found: Vec<String>,
    rules: &[Rule],
    policy: &PriorityPolicy,
) -> Vec<String> {
    let original = found.clone();
    for sid in original.iter().filter(|s| policy.is_deprioritized(s)) {
        let candidate = pool
            .iter()
            .find(|x| !policy.is_deprioritized(x) && !found.contains(x));
        let Some(candidate) = candidate else {
            continue;
        };

        let mut trial: Vec<String> = found.iter().filter(|z| z.as_str() != sid.as_str()).cloned().collect();
        trial.push(candidate.clone());
        if trial.len() == day.required && all_satisfied(rules, &trial) {
            debug!(day = %day.code, outgoing = %sid, incoming = %candidate, "low-priority swap");
            found = trial;
        }
    }
    found
}

/// Applies every paired-slot rule of the policy to `assignments`.
pub fn repair_paired_days(
    days: &[Day],
    index: &AvailabilityIndex,
    assignments: &mut BTreeMap<String, Vec<String>>,
    policy: &PriorityPolicy,
) {
    for paired in &policy.paired_days {
        repair_pair(days, index, assignments, paired);
    }
}

fn repair_pair(
    days: &[Day],
    index: &AvailabilityIndex,
    assignments: &mut BTreeMap<String, Vec<String>>,
    paired: &PairedDays,
) {
    let first = days.iter().find(|d| d.code == paired.first_code);
    let second = days.iter().find(|d| d.code == paired.second_code);
    let (Some(first), Some(second)) = (first, second) else {
        return;
    };
    if first.id == second.id {
        return;
    }

    let first_members = assignments.get(&first.id).cloned().unwrap_or_default();
    // Doubles are judged against the second half as it stood before the pass
    let doubled = assignments.get(&second.id).cloned().unwrap_or_default();
    let mut second_members = doubled.clone();

    for sid in &first_members {
        if paired.is_exempt(sid) || !doubled.contains(sid) {
            continue;
        }

        let candidate = index
            .pool(&second.id)
            .iter()
            .filter(|x| !second_members.contains(x))
            .find(|x| substitute(&second_members, sid, x, second.required).len() == second.required);

        if let Some(candidate) = candidate {
            debug!(
                day = %second.code,
                outgoing = %sid,
                incoming = %candidate,
                "paired-slot swap"
            );
            second_members = substitute(&second_members, sid, candidate, second.required);
        }
    }

    assignments.insert(second.id.clone(), second_members);
}

/// `members` plus `incoming`, minus `outgoing`, capped at `cap`.
fn substitute(members: &[String], outgoing: &str, incoming: &str, cap: usize) -> Vec<String> {
    let mut out: Vec<String> = members.to_vec();
    if !out.iter().any(|m| m == incoming) {
        out.push(incoming.to_string());
    }
    out.retain(|m| m != outgoing);
    out.truncate(cap);
    out
}
