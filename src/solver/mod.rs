//! Weekly roster solver.
//!
//! # Algorithm
//!
//! 1. Build every slot's availability pool (roster order).
//! 2. For each slot independently:
//!    - order the pool by policy score (stable),
//!    - group it by `Must` rules (union-find),
//!    - backtrack to the first feasible set of exactly the headcount,
//!    - on single-seat slots, apply the fallback chain,
//!    - try to swap deprioritized members out.
//! 3. Across slots, keep staff off both halves of each paired shift.
//! 4. Summarize into a `SolveResult`.
//!
//! The solver never fails and never mutates its input; identical inputs
//! give identical results.

mod grouping;
mod pool;
mod repair;
mod report;
mod search;
mod single_slot;

pub use grouping::{PoolGroups, UnionFind};
pub use pool::AvailabilityIndex;
pub use repair::{repair_low_priority, repair_paired_days};
pub use report::build_report;
pub use search::{CandidateSearch, SearchOutcome};
pub use single_slot::apply_single_slot_override;

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use crate::models::{Day, Rule, RosterSnapshot, SolveResult};
use crate::policy::PriorityPolicy;
use crate::scoring::{PriorityScorer, ScoringContext};

/// Policy-driven roster solver.
///
/// # Example
///
/// ```
/// use u_roster::models::{Availability, Day, RosterSnapshot, Rule, Staff};
/// use u_roster::policy::PriorityPolicy;
/// use u_roster::solver::RosterSolver;
///
/// let snapshot = RosterSnapshot::new()
///     .with_staff(Staff::new("a", "Ana"))
///     .with_staff(Staff::new("b", "Bia"))
///     .with_staff(Staff::new("c", "Caio"))
///     .with_day(Day::new("fri", 2).with_label("Friday"))
///     .with_rule(Rule::never("r1", "a", "b"))
///     .with_availability(Availability::new().with("a", ["fri"]).with("b", ["fri"]).with("c", ["fri"]));
///
/// let result = RosterSolver::new(PriorityPolicy::default()).solve(&snapshot);
/// assert!(result.ok);
/// assert_eq!(result.assignment("fri"), &["a".to_string(), "c".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct RosterSolver {
    policy: PriorityPolicy,
    scorer: PriorityScorer,
}

impl RosterSolver {
    /// Creates a solver scoring with the policy's standard rules.
    pub fn new(policy: PriorityPolicy) -> Self {
        let scorer = PriorityScorer::from_policy(&policy);
        Self { policy, scorer }
    }

    /// Replaces the scorer (the policy still drives overrides and repairs).
    pub fn with_scorer(mut self, scorer: PriorityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The policy in use.
    pub fn policy(&self) -> &PriorityPolicy {
        &self.policy
    }

    /// Solves a snapshot.
    #[instrument(
        skip_all,
        fields(
            staff = snapshot.staff.len(),
            days = snapshot.days.len(),
            rules = snapshot.rules.len()
        )
    )]
    pub fn solve(&self, snapshot: &RosterSnapshot) -> SolveResult {
        let rules = effective_rules(snapshot);
        let index = AvailabilityIndex::build(snapshot);

        let mut assignments: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for day in &snapshot.days {
            let members = self.resolve_day(day, index.pool(&day.id), &rules);
            assignments.insert(day.id.clone(), members);
        }

        repair_paired_days(&snapshot.days, &index, &mut assignments, &self.policy);

        let result = build_report(snapshot, &index, assignments);
        for day in result.unfilled_days() {
            warn!(
                day = %day.code,
                required = day.required,
                assigned = day.assigned.len(),
                available = day.available,
                "slot left unfilled"
            );
        }
        result
    }

    /// Resolves one slot: score, group, search, override, repair.
    fn resolve_day(&self, day: &Day, pool: &[String], rules: &[Rule]) -> Vec<String> {
        let ctx = ScoringContext::new(day, rules, &self.policy);
        let ordered = self.scorer.sort_pool(pool, &ctx);
        let groups = PoolGroups::build(&ordered, rules);
        let outcome = CandidateSearch::new(&ordered, &groups, rules, day.required).run();
        debug!(
            day = %day.code,
            pool = ordered.len(),
            groups = groups.len(),
            required = day.required,
            nodes = outcome.nodes,
            found = outcome.members.is_some(),
            "slot searched"
        );

        match apply_single_slot_override(day, &ordered, outcome.members, &self.policy) {
            Some(found) => repair_low_priority(day, &ordered, found, rules, &self.policy),
            None => Vec::new(),
        }
    }
}

/// Solves `snapshot` under `policy`.
pub fn solve(snapshot: &RosterSnapshot, policy: &PriorityPolicy) -> SolveResult {
    RosterSolver::new(policy.clone()).solve(snapshot)
}

/// Rules whose endpoints are both on the roster. Dangling rules are dropped.
fn effective_rules(snapshot: &RosterSnapshot) -> Vec<Rule> {
    let on_roster = |id: &str| snapshot.staff.iter().any(|s| s.id == id);
    let rules: Vec<Rule> = snapshot
        .rules
        .iter()
        .filter(|r| on_roster(&r.a) && on_roster(&r.b))
        .cloned()
        .collect();
    if rules.len() < snapshot.rules.len() {
        debug!(
            dropped = snapshot.rules.len() - rules.len(),
            "ignoring rules with unknown staff"
        );
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{all_satisfied, Availability, RuleKind, Staff};
    use crate::policy::{DayOverride, PairedDays};
    use crate::presets::{weekly_policy, weekly_roster};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Snapshot with the given preset staff ids, one slot per `(code, required)`,
    /// and every listed staff member available on every slot.
    fn mk(staff: &[&str], days: &[(&str, usize)]) -> RosterSnapshot {
        let mut snap = RosterSnapshot::new();
        let preset = weekly_roster();
        for id in staff {
            let name = preset.name_of(id).to_string();
            snap = snap.with_staff(Staff::new(*id, name));
        }
        for (code, required) in days {
            snap = snap.with_day(Day::new(*code, *required).with_label(*code).with_code(*code));
        }
        let day_ids: Vec<&str> = days.iter().map(|(c, _)| *c).collect();
        for id in staff {
            snap.availability.set(*id, day_ids.clone());
        }
        snap
    }

    fn picked(result: &SolveResult, day: &str) -> Vec<String> {
        result.assignment(day).to_vec()
    }

    // ======================== Policy scenarios ========================

    #[test]
    fn test_single_seat_prefers_top_tier() {
        let snap = mk(&["marina", "lauren", "leo"], &[("thu", 1)]);
        let res = solve(&snap, &weekly_policy());
        let p = picked(&res, "thu");
        assert_eq!(p.len(), 1);
        assert!(p[0] == "marina" || p[0] == "lauren");
        assert!(res.ok);
    }

    #[test]
    fn test_day_override_favorite_included() {
        let snap = mk(&["gabi", "ana", "duda"], &[("sat", 2)]);
        let res = solve(&snap, &weekly_policy());
        assert!(res.is_assigned("sat", "gabi"));
        assert!(!res.is_assigned("sat", "duda"));
    }

    #[test]
    fn test_paired_halves_not_shared() {
        let mut snap = mk(&["ana", "duda", "gabi"], &[("sun_lunch", 1), ("sun_night", 1)]);
        snap.availability.set("gabi", Vec::<String>::new());
        let res = solve(&snap, &weekly_policy());
        let lunch = picked(&res, "sun_lunch");
        let night = picked(&res, "sun_night");
        assert_eq!(lunch.len(), 1);
        assert_eq!(night.len(), 1);
        assert_ne!(lunch, night);
    }

    #[test]
    fn test_paired_exempt_may_work_both() {
        let snap = mk(&["gabi"], &[("sun_lunch", 1), ("sun_night", 1)]);
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "sun_lunch"), vec!["gabi".to_string()]);
        assert_eq!(picked(&res, "sun_night"), vec!["gabi".to_string()]);
    }

    #[test]
    fn test_fallback_prefers_ana_over_mariana() {
        let snap = mk(&["ana", "mariana"], &[("wed", 1)]);
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "wed"), vec!["ana".to_string()]);
    }

    #[test]
    fn test_lone_candidate_picked() {
        let mut snap = mk(&["leo", "ana"], &[("thu", 1)]);
        snap.availability.set("ana", Vec::<String>::new());
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "thu"), vec!["leo".to_string()]);

        let mut snap = mk(&["mariana", "ana"], &[("wed", 1)]);
        snap.availability.set("ana", Vec::<String>::new());
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "wed"), vec!["mariana".to_string()]);
    }

    #[test]
    fn test_deprioritized_only_as_last_resort() {
        let snap = mk(&["duda", "dani", "ana"], &[("fri", 1)]);
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "fri"), vec!["ana".to_string()]);
    }

    #[test]
    fn test_deprioritized_fills_when_needed() {
        let snap = mk(&["ana", "duda"], &[("sat", 2)]);
        let res = solve(&snap, &weekly_policy());
        let mut p = picked(&res, "sat");
        p.sort();
        assert_eq!(p, vec!["ana".to_string(), "duda".to_string()]);
        assert!(res.ok);
    }

    #[test]
    fn test_fallback_fills_seat_blocked_by_rule() {
        // Leo's Must partner is unavailable, so the search leaves the seat
        // empty; the unresolved fallback still seats Leo.
        let mut snap = mk(&["leo", "nayara"], &[("thu", 1)]);
        snap.availability.set("nayara", Vec::<String>::new());
        snap = snap.with_rule(Rule::must("r1", "leo", "nayara"));
        let res = solve(&snap, &weekly_policy());
        assert_eq!(picked(&res, "thu"), vec!["leo".to_string()]);
    }

    // ======================== Pipeline behavior ========================

    #[test]
    fn test_empty_inputs() {
        let res = solve(&RosterSnapshot::new(), &PriorityPolicy::default());
        assert!(res.ok);
        assert!(res.assignments.is_empty());

        let snap = RosterSnapshot::new()
            .with_staff(Staff::new("a", "A"))
            .with_day(Day::new("d1", 1).with_label("Mon"));
        let res = solve(&snap, &PriorityPolicy::default());
        assert!(!res.ok);
        assert_eq!(res.assignment("d1").len(), 0);
        assert!(res.assignments.contains_key("d1"));
        assert_eq!(res.messages.len(), 2);
    }

    #[test]
    fn test_zero_required_slot_is_filled() {
        let snap = mk(&["ana"], &[("off", 0)]);
        let res = solve(&snap, &weekly_policy());
        assert!(res.ok);
        assert!(res.assignment("off").is_empty());
    }

    #[test]
    fn test_dangling_rule_ignored() {
        let snap = mk(&["ana", "leo"], &[("fri", 2)]).with_rule(Rule::must("r1", "ana", "ghost"));
        let res = solve(&snap, &PriorityPolicy::default());
        assert!(res.ok);
        assert_eq!(res.assignment("fri").len(), 2);
    }

    #[test]
    fn test_must_pair_excluded_together() {
        let snap = mk(&["ana", "leo", "nayara"], &[("wed", 1)])
            .with_rule(Rule::must("r1", "ana", "leo"));
        let res = solve(&snap, &PriorityPolicy::default());
        assert_eq!(picked(&res, "wed"), vec!["nayara".to_string()]);
    }

    #[test]
    fn test_input_not_mutated() {
        let snap = mk(&["ana", "duda", "leo"], &[("sat", 2), ("sun_lunch", 1), ("sun_night", 1)]);
        let before = snap.clone();
        let _ = solve(&snap, &weekly_policy());
        assert_eq!(snap, before);
    }

    #[test]
    fn test_custom_scorer() {
        use crate::scoring::{rules, PriorityScorer};
        let snap = mk(&["ana", "leo"], &[("fri", 1)]);
        let policy = PriorityPolicy::new().with_top_tier(["leo"]);

        let res = RosterSolver::new(policy.clone()).solve(&snap);
        assert_eq!(picked(&res, "fri"), vec!["leo".to_string()]);

        // A scorer that ignores tiers falls back to roster order
        let solver = RosterSolver::new(policy).with_scorer(PriorityScorer::new().with_rule(rules::MustLinks));
        assert_eq!(picked(&solver.solve(&snap), "fri"), vec!["ana".to_string()]);
    }

    #[test]
    fn test_full_week() {
        let mut snap = weekly_roster();
        let all: Vec<String> = snap.days.iter().map(|d| d.id.clone()).collect();
        for s in snap.staff.clone() {
            snap.availability.set(s.id, all.clone());
        }
        let res = solve(&snap, &weekly_policy());
        assert!(res.ok);
        assert_eq!(res.messages.len(), 6);

        let names = |day: &str| res.days.iter().find(|d| d.day_id == day).unwrap().assigned_names.join(",");
        assert_eq!(names("wed"), "Lauren");
        assert_eq!(names("thu"), "Lauren");
        assert_eq!(names("fri"), "Lauren,Marina,Ana,Leo");
        assert_eq!(names("sat"), "Gabi,Lauren,Marina,Ana,Leo");
        assert_eq!(names("sun_lunch"), "Lauren,Marina,Ana");
        // Lauren and Marina are swapped out in turn; Lauren comes back as
        // Marina's replacement and is not revisited.
        assert_eq!(names("sun_night"), "Ana,Lauren");
    }

    #[test]
    fn test_repairs_idempotent() {
        let policy = weekly_policy();

        // Deprioritized member kept because the only swap breaks a rule
        let snap = mk(&["ana", "duda", "leo"], &[("sat", 2)]).with_rule(Rule::never("r1", "ana", "leo"));
        let res = solve(&snap, &policy);
        assert_eq!(picked(&res, "sat"), vec!["ana".to_string(), "duda".to_string()]);

        let index = AvailabilityIndex::build(&snap);
        let rules = effective_rules(&snap);
        let day = &snap.days[0];
        let ctx = ScoringContext::new(day, &rules, &policy);
        let ordered = PriorityScorer::from_policy(&policy).sort_pool(index.pool(&day.id), &ctx);
        let again = repair_low_priority(day, &ordered, picked(&res, "sat"), &rules, &policy);
        assert_eq!(again, picked(&res, "sat"));

        // Paired halves already separated
        let snap = mk(&["ana", "duda"], &[("sun_lunch", 1), ("sun_night", 1)]);
        let res = solve(&snap, &policy);
        assert_eq!(picked(&res, "sun_night"), vec!["duda".to_string()]);

        let index = AvailabilityIndex::build(&snap);
        let mut again = res.assignments.clone();
        repair_paired_days(&snap.days, &index, &mut again, &policy);
        assert_eq!(again, res.assignments);
    }

    #[test]
    fn test_unchecked_paired_swap_can_break_never_rule() {
        // Known gap: the paired-slot pass does not re-check rules.
        let mut snap = RosterSnapshot::new()
            .with_staff(Staff::new("a", "A"))
            .with_staff(Staff::new("b", "B"))
            .with_staff(Staff::new("c", "C"))
            .with_day(Day::new("l", 1).with_code("lunch"))
            .with_day(Day::new("n", 2).with_code("night"))
            .with_rule(Rule::never("r1", "b", "c"));
        snap.availability.set("a", ["l", "n"]);
        snap.availability.set("b", ["n"]);
        snap.availability.set("c", ["n"]);
        let policy = PriorityPolicy::new()
            .with_top_tier(["a"])
            .with_paired_days(PairedDays::new("lunch", "night"));

        let res = solve(&snap, &policy);
        assert_eq!(picked(&res, "l"), vec!["a".to_string()]);
        // Search picks a and b; the paired pass swaps a for c
        assert_eq!(picked(&res, "n"), vec!["b".to_string(), "c".to_string()]);
        assert!(!all_satisfied(&snap.rules, res.assignment("n")));
    }

    // ======================== Randomized invariants ========================

    fn random_snapshot(rng: &mut SmallRng) -> RosterSnapshot {
        let n_staff = rng.random_range(2..=8);
        let n_days = rng.random_range(1..=4);
        let mut snap = RosterSnapshot::new();
        for i in 0..n_staff {
            snap = snap.with_staff(Staff::new(format!("s{i}"), format!("S{i}")));
        }
        for d in 0..n_days {
            let code = if d == 0 { "hot".to_string() } else { format!("c{d}") };
            snap = snap.with_day(Day::new(format!("d{d}"), rng.random_range(0..=4)).with_code(code));
        }
        let n_rules = rng.random_range(0..=4);
        for r in 0..n_rules {
            let a = rng.random_range(0..n_staff);
            let b = rng.random_range(0..n_staff);
            if a == b {
                continue;
            }
            let kind = if rng.random_bool(0.5) {
                RuleKind::Must
            } else {
                RuleKind::Never
            };
            snap = snap.with_rule(Rule::new(format!("r{r}"), format!("s{a}"), format!("s{b}"), kind));
        }
        let mut availability = Availability::new();
        for i in 0..n_staff {
            let days: Vec<String> = (0..n_days)
                .filter(|_| rng.random_bool(0.6))
                .map(|d| format!("d{d}"))
                .collect();
            availability.set(format!("s{i}"), days);
        }
        snap.with_availability(availability)
    }

    fn random_policy() -> PriorityPolicy {
        PriorityPolicy::new()
            .with_top_tier(["s0"])
            .with_avoid_single(["s1"])
            .with_deprioritized(["s2", "s3"])
            .with_single_seat_nudge(["s1"])
            .with_day_override(DayOverride::new("hot", "s4"))
    }

    #[test]
    fn test_random_instances_hold_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);
        let policy = random_policy();

        for _ in 0..300 {
            let snap = random_snapshot(&mut rng);
            let res = solve(&snap, &policy);
            let again = solve(&snap, &policy);
            assert_eq!(res, again);

            let index = AvailabilityIndex::build(&snap);
            let mut all_full = true;
            for day in &snap.days {
                let members = res.assignment(&day.id);
                assert!(res.assignments.contains_key(&day.id));
                assert!(members.len() <= day.required);
                all_full &= members.len() == day.required;
                for m in members {
                    assert!(index.contains(&day.id, m));
                }
                for rule in &snap.rules {
                    let has_a = members.contains(&rule.a);
                    let has_b = members.contains(&rule.b);
                    match rule.kind {
                        RuleKind::Never => assert!(!(has_a && has_b)),
                        RuleKind::Must => assert_eq!(has_a, has_b),
                    }
                }
            }
            assert_eq!(res.ok, all_full);
        }
    }

    #[test]
    fn test_random_instances_feasibility_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(7);
        let policy = PriorityPolicy::default();

        for _ in 0..200 {
            let snap = random_snapshot(&mut rng);
            let res = solve(&snap, &policy);
            let index = AvailabilityIndex::build(&snap);
            for day in &snap.days {
                let pool = index.pool(&day.id);
                let exists = (0u32..(1 << pool.len())).any(|mask| {
                    let set: Vec<String> = pool
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, s)| s.clone())
                        .collect();
                    set.len() == day.required && all_satisfied(&snap.rules, &set)
                });
                assert_eq!(res.assignment(&day.id).len() == day.required, exists);
            }
        }
    }
}
