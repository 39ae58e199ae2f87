//! Solver output model.
//!
//! A solve always produces a result: infeasible slots show up as
//! under-sized assignments and `ok == false`, never as an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Every slot got exactly its required headcount.
    pub ok: bool,
    /// Slot id → assigned staff ids. One entry per input slot.
    pub assignments: BTreeMap<String, Vec<String>>,
    /// Advisory text: shortfall notes and one status line per slot.
    pub messages: Vec<String>,
    /// Per-slot facts, in input slot order.
    pub days: Vec<DayReport>,
}

/// Facts about one slot after solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Slot id.
    pub day_id: String,
    /// Slot code.
    pub code: String,
    /// Slot label.
    pub label: String,
    /// Required headcount.
    pub required: usize,
    /// Size of the availability pool.
    pub available: usize,
    /// Assigned staff ids.
    pub assigned: Vec<String>,
    /// Assigned staff names (unknown ids skipped).
    pub assigned_names: Vec<String>,
}

impl DayReport {
    /// Fewer people available than seats.
    #[inline]
    pub fn short_supply(&self) -> bool {
        self.available < self.required
    }

    /// Assignment reached the required headcount.
    #[inline]
    pub fn filled(&self) -> bool {
        self.assigned.len() == self.required
    }
}

impl SolveResult {
    /// Assigned staff ids for a slot (empty for unknown slots).
    pub fn assignment(&self, day_id: &str) -> &[String] {
        self.assignments
            .get(day_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a staff member is assigned to a slot.
    pub fn is_assigned(&self, day_id: &str, staff_id: &str) -> bool {
        self.assignment(day_id).iter().any(|s| s == staff_id)
    }

    /// Reports for slots that did not reach their headcount.
    pub fn unfilled_days(&self) -> Vec<&DayReport> {
        self.days.iter().filter(|d| !d.filled()).collect()
    }

    /// Total number of seats assigned across all slots.
    pub fn assignment_count(&self) -> usize {
        self.assignments.values().map(|v| v.len()).sum()
    }
}
