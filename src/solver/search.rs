//! Backtracking feasibility search for one slot.
//!
//! # Algorithm
//!
//! Walks the scored pool index by index. At each index it first tries
//! adding the candidate's whole `Must` group, then tries skipping the
//! candidate. A set is accepted only after the whole pool has been
//! traversed, when its size equals the headcount and every rule holds.
//! The first accepted set wins: this is a feasibility search, and the
//! scorer's ordering decides which feasible set is met first.
//!
//! Partial sets are pruned when they exceed the headcount, when the
//! remaining pool cannot reach it, or when including a group already
//! breaks a rule (such a violation can never be undone by adding more).
//!
//! # Complexity
//! O(2^n) in the pool size n; depth is bounded by n.

use crate::models::{Rule, RuleKind};

use super::grouping::PoolGroups;

/// A rule resolved to pool positions (`None` = endpoint not in the pool).
#[derive(Debug, Clone, Copy)]
struct PoolRule {
    kind: RuleKind,
    a: Option<usize>,
    b: Option<usize>,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// First feasible set, in inclusion order. `None` if none exists.
    pub members: Option<Vec<String>>,
    /// Number of search nodes visited.
    pub nodes: usize,
}

/// Feasibility search over one slot's scored pool.
#[derive(Debug)]
pub struct CandidateSearch<'a> {
    pool: &'a [String],
    groups: &'a PoolGroups,
    rules: Vec<PoolRule>,
    target: usize,
}

impl<'a> CandidateSearch<'a> {
    /// Prepares a search for exactly `target` members of `pool`.
    pub fn new(pool: &'a [String], groups: &'a PoolGroups, rules: &[Rule], target: usize) -> Self {
        let position = |id: &str| pool.iter().position(|s| s == id);
        let rules = rules
            .iter()
            .map(|r| PoolRule {
                kind: r.kind,
                a: position(&r.a),
                b: position(&r.b),
            })
            .collect();
        Self {
            pool,
            groups,
            rules,
            target,
        }
    }

    /// Runs the search.
    pub fn run(&self) -> SearchOutcome {
        let mut nodes = 0;
        let mut in_set = vec![false; self.pool.len()];
        let mut chosen = Vec::new();
        let found = self.backtrack(0, &mut chosen, &mut in_set, &mut nodes);
        SearchOutcome {
            members: found.map(|idx| idx.into_iter().map(|i| self.pool[i].clone()).collect()),
            nodes,
        }
    }

    fn backtrack(
        &self,
        idx: usize,
        chosen: &mut Vec<usize>,
        in_set: &mut [bool],
        nodes: &mut usize,
    ) -> Option<Vec<usize>> {
        *nodes += 1;

        if chosen.len() > self.target {
            return None;
        }
        if idx >= self.pool.len() {
            return (chosen.len() == self.target && self.is_valid(in_set)).then(|| chosen.clone());
        }
        if self.target - chosen.len() > self.pool.len() - idx {
            return None;
        }

        // Already pulled in by an earlier group mate
        if in_set[idx] {
            return self.backtrack(idx + 1, chosen, in_set, nodes);
        }

        // Include branch: add the candidate's group members not yet present
        let added: Vec<usize> = self
            .groups
            .members_of(idx)
            .iter()
            .copied()
            .filter(|&m| !in_set[m])
            .collect();
        if chosen.len() + added.len() <= self.target {
            for &m in &added {
                in_set[m] = true;
                chosen.push(m);
            }
            let valid = self.is_valid(in_set);
            let found = if valid {
                self.backtrack(idx + 1, chosen, in_set, nodes)
            } else {
                None
            };
            for &m in &added {
                in_set[m] = false;
            }
            chosen.truncate(chosen.len() - added.len());
            if found.is_some() {
                return found;
            }
        }

        // Skip branch
        self.backtrack(idx + 1, chosen, in_set, nodes)
    }

    fn is_valid(&self, in_set: &[bool]) -> bool {
        let present = |p: Option<usize>| p.is_some_and(|i| in_set[i]);
        self.rules.iter().all(|r| {
            let (a, b) = (present(r.a), present(r.b));
            match r.kind {
                RuleKind::Never => !(a && b),
                RuleKind::Must => a == b,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::all_satisfied;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn search(pool: &[&str], rules: &[Rule], target: usize) -> Option<Vec<String>> {
        let pool = ids(pool);
        let groups = PoolGroups::build(&pool, rules);
        CandidateSearch::new(&pool, &groups, rules, target).run().members
    }

    #[test]
    fn test_first_in_order_wins() {
        assert_eq!(search(&["a", "b", "c"], &[], 2), Some(ids(&["a", "b"])));
        assert_eq!(search(&["c", "b", "a"], &[], 1), Some(ids(&["c"])));
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(search(&["a", "b"], &[], 0), Some(vec![]));
        assert_eq!(search(&[], &[], 0), Some(vec![]));
    }

    #[test]
    fn test_not_enough_candidates() {
        assert_eq!(search(&["a"], &[], 2), None);
        assert_eq!(search(&[], &[], 1), None);
    }

    #[test]
    fn test_never_pair_separated() {
        let rules = vec![Rule::never("r1", "a", "b")];
        assert_eq!(search(&["a", "b", "c"], &rules, 2), Some(ids(&["a", "c"])));
        assert_eq!(search(&["a", "b"], &rules, 2), None);
    }

    #[test]
    fn test_must_group_added_together() {
        let rules = vec![Rule::must("r1", "a", "c")];
        assert_eq!(search(&["a", "b", "c"], &rules, 2), Some(ids(&["a", "c"])));
        // Group too large for one seat: it is skipped as a whole
        assert_eq!(search(&["a", "b", "c"], &rules, 1), Some(ids(&["b"])));
    }

    #[test]
    fn test_must_partner_unavailable_blocks_member() {
        // "z" is not in the pool, so "a" can never be assigned
        let rules = vec![Rule::must("r1", "a", "z")];
        assert_eq!(search(&["a", "b"], &rules, 1), Some(ids(&["b"])));
        assert_eq!(search(&["a", "b"], &rules, 2), None);
    }

    #[test]
    fn test_mixed_rules() {
        let rules = vec![
            Rule::must("r1", "a", "b"),
            Rule::never("r2", "b", "c"),
            Rule::never("r3", "d", "e"),
        ];
        let found = search(&["a", "b", "c", "d", "e"], &rules, 3).unwrap();
        assert_eq!(found, ids(&["a", "b", "d"]));
        assert!(all_satisfied(&rules, &found));
    }

    #[test]
    fn test_infeasible_by_rules() {
        let rules = vec![Rule::must("r1", "a", "b"), Rule::never("r2", "a", "b")];
        assert_eq!(search(&["a", "b", "c"], &rules, 2), None);
        assert_eq!(search(&["a", "b", "c"], &rules, 1), Some(ids(&["c"])));
    }

    #[test]
    fn test_node_count_reported() {
        let pool = ids(&["a", "b", "c"]);
        let groups = PoolGroups::build(&pool, &[]);
        let out = CandidateSearch::new(&pool, &groups, &[], 3).run();
        assert_eq!(out.members, Some(pool.clone()));
        // root + three include steps
        assert_eq!(out.nodes, 4);
    }
}
