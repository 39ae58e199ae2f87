//! Scoring context for rule evaluation.

use crate::models::{Day, Rule, RuleKind};
use crate::policy::PriorityPolicy;

/// The slot being scored plus everything rules may consult.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Slot whose pool is being ordered.
    pub day: &'a Day,
    /// Pairwise rules in force.
    pub rules: &'a [Rule],
    /// Tier and override configuration.
    pub policy: &'a PriorityPolicy,
}

impl<'a> ScoringContext<'a> {
    /// Creates a context.
    pub fn new(day: &'a Day, rules: &'a [Rule], policy: &'a PriorityPolicy) -> Self {
        Self { day, rules, policy }
    }

    /// Number of rules of `kind` that involve `staff_id`.
    pub fn link_count(&self, staff_id: &str, kind: RuleKind) -> usize {
        self.rules
            .iter()
            .filter(|r| r.kind == kind && r.involves(staff_id))
            .count()
    }
}
