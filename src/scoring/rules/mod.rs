//! Built-in scoring rules.
//!
//! # Categories
//!
//! - **Relations**: MUST_LINKS, NEVER_LINKS
//! - **Tiers**: TOP_TIER, DEPRIORITIZED
//! - **Slot-specific**: DAY_OVERRIDE, AVOID_SINGLE_SEAT, SINGLE_SEAT_NUDGE
//!
//! # Score Convention
//! Rules return a raw contribution (a count, an indicator, or a signed
//! indicator); the scorer multiplies it by the rule's weight. Higher
//! totals are explored first.

use super::{Score, ScoreRule, ScoringContext};
use crate::models::RuleKind;

// ======================== Relation rules ========================

/// Number of `Must` rules the candidate participates in.
///
/// Constrained staff are explored first so that the first feasible set
/// tends to settle their pairs early.
#[derive(Debug, Clone, Copy)]
pub struct MustLinks;

impl ScoreRule for MustLinks {
    fn name(&self) -> &'static str {
        "MUST_LINKS"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        context.link_count(staff_id, RuleKind::Must) as f64
    }

    fn description(&self) -> &'static str {
        "Must-rule participation count"
    }
}

/// Number of `Never` rules the candidate participates in.
#[derive(Debug, Clone, Copy)]
pub struct NeverLinks;

impl ScoreRule for NeverLinks {
    fn name(&self) -> &'static str {
        "NEVER_LINKS"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        context.link_count(staff_id, RuleKind::Never) as f64
    }

    fn description(&self) -> &'static str {
        "Never-rule participation count"
    }
}

// ======================== Tier rules ========================

/// 1.0 for top-tier members.
#[derive(Debug, Clone, Copy)]
pub struct TopTier;

impl ScoreRule for TopTier {
    fn name(&self) -> &'static str {
        "TOP_TIER"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        if context.policy.is_top_tier(staff_id) {
            1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Generally preferred staff"
    }
}

/// -1.0 for deprioritized members, on every slot.
#[derive(Debug, Clone, Copy)]
pub struct Deprioritized;

impl ScoreRule for Deprioritized {
    fn name(&self) -> &'static str {
        "DEPRIORITIZED"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        if context.policy.is_deprioritized(staff_id) {
            -1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Last-resort staff"
    }
}

// ======================== Slot-specific rules ========================

/// Sum of the policy's override weights matching this slot's code.
///
/// The weights live on the overrides themselves, so this rule is
/// normally registered with weight 1.0.
#[derive(Debug, Clone, Copy)]
pub struct DayOverrideBonus;

impl ScoreRule for DayOverrideBonus {
    fn name(&self) -> &'static str {
        "DAY_OVERRIDE"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        context.policy.override_bonus(&context.day.code, staff_id)
    }

    fn description(&self) -> &'static str {
        "Slot-specific favorite"
    }
}

/// -1.0 for avoid-single members, only on single-seat slots.
#[derive(Debug, Clone, Copy)]
pub struct AvoidSingleSeat;

impl ScoreRule for AvoidSingleSeat {
    fn name(&self) -> &'static str {
        "AVOID_SINGLE_SEAT"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        if context.day.is_single_seat() && context.policy.is_avoid_single(staff_id) {
            -1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Staff kept off single-seat slots"
    }
}

/// 1.0 for nudged members, only on single-seat slots.
#[derive(Debug, Clone, Copy)]
pub struct SingleSeatNudge;

impl ScoreRule for SingleSeatNudge {
    fn name(&self) -> &'static str {
        "SINGLE_SEAT_NUDGE"
    }

    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score {
        if context.day.is_single_seat() && context.policy.is_nudged(staff_id) {
            1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Tie nudge on single-seat slots"
    }
}
