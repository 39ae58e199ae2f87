//! Priority policy: the solver's configuration.
//!
//! Encodes organizational preferences as data instead of conditionals:
//! staff tiers, slot-specific favorites, the single-seat fallback chain,
//! and paired slots that should not share staff.
//!
//! Every field defaults to empty, so `PriorityPolicy::default()` scores
//! candidates by rule participation only and performs no overrides.
//! Ids that do not appear on the roster simply never match.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default bonus for a slot-specific favorite.
pub const DEFAULT_OVERRIDE_WEIGHT: f64 = 6.0;

/// Score weights for the standard scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Added per `Must` rule the candidate participates in.
    pub must_link: f64,
    /// Added per `Never` rule the candidate participates in.
    pub never_link: f64,
    /// Added for top-tier members.
    pub top_tier: f64,
    /// Subtracted for avoid-single members on single-seat slots.
    pub avoid_single: f64,
    /// Added for nudged members on single-seat slots.
    pub single_seat_nudge: f64,
    /// Subtracted for deprioritized members. Large enough to act as "last resort".
    pub deprioritized: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            must_link: 2.0,
            never_link: 1.0,
            top_tier: 5.0,
            avoid_single: 4.0,
            single_seat_nudge: 0.5,
            deprioritized: 1000.0,
        }
    }
}

/// Bonus for one staff member on slots with a given code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOverride {
    /// Slot code the bonus applies to.
    pub day_code: String,
    /// Favored staff id.
    pub staff_id: String,
    /// Score added.
    #[serde(default = "default_override_weight")]
    pub weight: f64,
}

fn default_override_weight() -> f64 {
    DEFAULT_OVERRIDE_WEIGHT
}

impl DayOverride {
    /// Creates an override with the default weight.
    pub fn new(day_code: impl Into<String>, staff_id: impl Into<String>) -> Self {
        Self {
            day_code: day_code.into(),
            staff_id: staff_id.into(),
            weight: DEFAULT_OVERRIDE_WEIGHT,
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// One step of the single-seat fallback chain.
///
/// Fires when `pick` and every id in `also_present` are in the slot's
/// pool, and, if `only_when_unresolved` is set, the search found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    /// Staff id forced into the seat.
    pub pick: String,
    /// Other ids that must also be in the pool.
    #[serde(default)]
    pub also_present: Vec<String>,
    /// Only fire when the search left the seat empty.
    #[serde(default)]
    pub only_when_unresolved: bool,
}

impl FallbackRule {
    /// Picks `staff_id` whenever it is in the pool.
    pub fn pick(staff_id: impl Into<String>) -> Self {
        Self {
            pick: staff_id.into(),
            also_present: Vec::new(),
            only_when_unresolved: false,
        }
    }

    /// Additionally requires `staff_id` to be in the pool.
    pub fn when_present(mut self, staff_id: impl Into<String>) -> Self {
        self.also_present.push(staff_id.into());
        self
    }

    /// Restricts the step to seats the search could not fill.
    pub fn when_unresolved(mut self) -> Self {
        self.only_when_unresolved = true;
        self
    }
}

/// Two slots forming halves of one shift (e.g., Sunday lunch and night).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedDays {
    /// Code of the first half.
    pub first_code: String,
    /// Code of the second half; replacements happen here.
    pub second_code: String,
    /// Staff id allowed to work both halves.
    #[serde(default)]
    pub exempt: Option<String>,
}

impl PairedDays {
    /// Creates a pairing without exemption.
    pub fn new(first_code: impl Into<String>, second_code: impl Into<String>) -> Self {
        Self {
            first_code: first_code.into(),
            second_code: second_code.into(),
            exempt: None,
        }
    }

    /// Exempts one staff member.
    pub fn with_exempt(mut self, staff_id: impl Into<String>) -> Self {
        self.exempt = Some(staff_id.into());
        self
    }

    /// Whether a staff member may work both halves.
    pub fn is_exempt(&self, staff_id: &str) -> bool {
        self.exempt.as_deref() == Some(staff_id)
    }
}

/// Organizational preferences applied on top of feasibility.
///
/// # Example
/// ```
/// use u_roster::policy::{FallbackRule, PairedDays, PriorityPolicy};
///
/// let policy = PriorityPolicy::new()
///     .with_top_tier(["marina", "lauren"])
///     .with_deprioritized(["duda"])
///     .with_fallback(FallbackRule::pick("leo").when_unresolved())
///     .with_paired_days(PairedDays::new("sun_lunch", "sun_night").with_exempt("gabi"));
/// assert!(policy.is_top_tier("marina"));
/// assert!(policy.is_deprioritized("duda"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityPolicy {
    /// Generally preferred staff.
    pub top_tier: BTreeSet<String>,
    /// Staff penalized on single-seat slots.
    pub avoid_single: BTreeSet<String>,
    /// Last-resort staff.
    pub deprioritized: BTreeSet<String>,
    /// Staff nudged upward on single-seat slots.
    pub single_seat_nudge: BTreeSet<String>,
    /// Slot-specific favorites.
    pub day_overrides: Vec<DayOverride>,
    /// Single-seat fallback chain, evaluated in order.
    pub single_slot_fallbacks: Vec<FallbackRule>,
    /// Slot pairs that should not share staff.
    pub paired_days: Vec<PairedDays>,
    /// Score weights.
    pub weights: ScoreWeights,
}

impl PriorityPolicy {
    /// Creates an empty policy with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds top-tier members.
    pub fn with_top_tier<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_tier.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Adds avoid-single members.
    pub fn with_avoid_single<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid_single.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Adds deprioritized members.
    pub fn with_deprioritized<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprioritized.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Adds single-seat nudged members.
    pub fn with_single_seat_nudge<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.single_seat_nudge.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Adds a slot-specific favorite.
    pub fn with_day_override(mut self, day_override: DayOverride) -> Self {
        self.day_overrides.push(day_override);
        self
    }

    /// Appends a step to the single-seat fallback chain.
    pub fn with_fallback(mut self, rule: FallbackRule) -> Self {
        self.single_slot_fallbacks.push(rule);
        self
    }

    /// Adds a slot pairing.
    pub fn with_paired_days(mut self, paired: PairedDays) -> Self {
        self.paired_days.push(paired);
        self
    }

    /// Replaces the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Whether a staff member is in the top tier.
    #[inline]
    pub fn is_top_tier(&self, staff_id: &str) -> bool {
        self.top_tier.contains(staff_id)
    }

    /// Whether a staff member is in the avoid-single tier.
    #[inline]
    pub fn is_avoid_single(&self, staff_id: &str) -> bool {
        self.avoid_single.contains(staff_id)
    }

    /// Whether a staff member is deprioritized.
    #[inline]
    pub fn is_deprioritized(&self, staff_id: &str) -> bool {
        self.deprioritized.contains(staff_id)
    }

    /// Whether a staff member gets the single-seat nudge.
    #[inline]
    pub fn is_nudged(&self, staff_id: &str) -> bool {
        self.single_seat_nudge.contains(staff_id)
    }

    /// Sum of override weights for a staff member on a slot code.
    pub fn override_bonus(&self, day_code: &str, staff_id: &str) -> f64 {
        self.day_overrides
            .iter()
            .filter(|o| o.day_code == day_code && o.staff_id == staff_id)
            .map(|o| o.weight)
            .sum()
    }

    /// Every staff id the policy mentions, with the field it came from.
    pub fn referenced_staff(&self) -> Vec<(&'static str, &str)> {
        let mut refs: Vec<(&'static str, &str)> = Vec::new();
        refs.extend(self.top_tier.iter().map(|s| ("top_tier", s.as_str())));
        refs.extend(self.avoid_single.iter().map(|s| ("avoid_single", s.as_str())));
        refs.extend(self.deprioritized.iter().map(|s| ("deprioritized", s.as_str())));
        refs.extend(
            self.single_seat_nudge
                .iter()
                .map(|s| ("single_seat_nudge", s.as_str())),
        );
        refs.extend(
            self.day_overrides
                .iter()
                .map(|o| ("day_overrides", o.staff_id.as_str())),
        );
        for f in &self.single_slot_fallbacks {
            refs.push(("single_slot_fallbacks", f.pick.as_str()));
            refs.extend(
                f.also_present
                    .iter()
                    .map(|s| ("single_slot_fallbacks", s.as_str())),
            );
        }
        refs.extend(
            self.paired_days
                .iter()
                .filter_map(|p| p.exempt.as_deref())
                .map(|s| ("paired_days", s)),
        );
        refs
    }
}
