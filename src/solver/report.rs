//! Result summarization.
//!
//! Builds the `ok` flag, the per-slot `DayReport`s, and the advisory
//! message list: one shortfall note per under-supplied slot, followed in
//! the same slot order by one status line per slot.

use std::collections::BTreeMap;

use crate::models::{DayReport, RosterSnapshot, SolveResult};

use super::pool::AvailabilityIndex;

/// Assembles the solve result from final assignments.
pub fn build_report(
    snapshot: &RosterSnapshot,
    index: &AvailabilityIndex,
    assignments: BTreeMap<String, Vec<String>>,
) -> SolveResult {
    let days: Vec<DayReport> = snapshot
        .days
        .iter()
        .map(|day| {
            let assigned = assignments.get(&day.id).cloned().unwrap_or_default();
            let assigned_names = assigned
                .iter()
                .map(|id| snapshot.name_of(id))
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect();
            DayReport {
                day_id: day.id.clone(),
                code: day.code.clone(),
                label: day.label.clone(),
                required: day.required,
                available: index.available(&day.id),
                assigned,
                assigned_names,
            }
        })
        .collect();

    let ok = days.iter().all(DayReport::filled);

    let mut messages = Vec::new();
    for r in &days {
        if r.short_supply() {
            messages.push(format!(
                "ℹ️ {}: only {} available for {} seats",
                r.label, r.available, r.required
            ));
        }
        if r.assigned_names.is_empty() {
            messages.push(format!("❌ {}: not filled", r.label));
        } else {
            messages.push(format!("✅ {}: {}", r.label, r.assigned_names.join(", ")));
        }
    }

    SolveResult {
        ok,
        assignments,
        messages,
        days,
    }
}
