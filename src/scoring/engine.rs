//! Weighted scorer for slot pools.
//!
//! Sums weighted rule contributions per candidate and orders the pool by
//! descending score. Ties keep roster order, which keeps the search, and
//! therefore the whole solve, deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Score, ScoreRule, ScoringContext};
use crate::policy::PriorityPolicy;

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn ScoreRule>,
    weight: f64,
}

/// A composable, additive candidate scorer.
///
/// # Example
/// ```
/// use u_roster::scoring::{rules, PriorityScorer};
///
/// let scorer = PriorityScorer::new()
///     .with_weighted_rule(rules::MustLinks, 2.0)
///     .with_rule(rules::TopTier);
/// assert_eq!(scorer.rule_count(), 2);
/// ```
#[derive(Clone)]
pub struct PriorityScorer {
    rules: Vec<WeightedRule>,
}

impl PriorityScorer {
    /// Creates an empty scorer (every candidate scores 0).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Standard composition, weighted from `policy.weights`.
    pub fn from_policy(policy: &PriorityPolicy) -> Self {
        let w = &policy.weights;
        Self::new()
            .with_weighted_rule(rules::MustLinks, w.must_link)
            .with_weighted_rule(rules::NeverLinks, w.never_link)
            .with_weighted_rule(rules::TopTier, w.top_tier)
            .with_rule(rules::DayOverrideBonus)
            .with_weighted_rule(rules::AvoidSingleSeat, w.avoid_single)
            .with_weighted_rule(rules::SingleSeatNudge, w.single_seat_nudge)
            .with_weighted_rule(rules::Deprioritized, w.deprioritized)
    }

    /// Adds a rule with weight 1.0.
    pub fn with_rule<R: ScoreRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 1.0)
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: ScoreRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Total score of one candidate.
    pub fn score(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(staff_id, context) * wr.weight)
            .sum()
    }

    /// Weighted contribution of each rule for one candidate, by rule name.
    pub fn breakdown(&self, staff_id: &str, context: &ScoringContext<'_>) -> Vec<(&'static str, Score)> {
        self.rules
            .iter()
            .map(|wr| (wr.rule.name(), wr.rule.evaluate(staff_id, context) * wr.weight))
            .collect()
    }

    /// Returns the pool sorted by descending score, ties in input order.
    pub fn sort_pool(&self, pool: &[String], context: &ScoringContext<'_>) -> Vec<String> {
        let scores: Vec<Score> = pool.iter().map(|s| self.score(s, context)).collect();
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        // `sort_by` is stable; -0.0 and 0.0 tie
        indices.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        indices.into_iter().map(|i| pool[i].clone()).collect()
    }
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PriorityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityScorer")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
