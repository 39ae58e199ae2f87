//! Pairwise staff rules.
//!
//! A rule relates two staff members symmetrically. It carries no day:
//! every slot evaluates it against its own assignment.
//!
//! - `Never(a, b)`: a and b are not assigned to the same slot.
//! - `Must(a, b)`: a and b share membership in a slot's assignment,
//!   both present or both absent. This is an equivalence, not a demand
//!   that the pair be scheduled.

use serde::{Deserialize, Serialize};

/// Kind of pairwise relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Matching membership in the same slot.
    Must,
    /// Mutual exclusion within the same slot.
    Never,
}

/// A symmetric relation between two staff members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier.
    pub id: String,
    /// First endpoint (staff id).
    pub a: String,
    /// Second endpoint (staff id).
    pub b: String,
    /// Relation kind.
    pub kind: RuleKind,
}

impl Rule {
    /// Creates a rule.
    pub fn new(
        id: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
        kind: RuleKind,
    ) -> Self {
        Self {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            kind,
        }
    }

    /// Creates a `Must` rule.
    pub fn must(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::new(id, a, b, RuleKind::Must)
    }

    /// Creates a `Never` rule.
    pub fn never(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::new(id, a, b, RuleKind::Never)
    }

    /// Whether `staff_id` is one of the endpoints.
    #[inline]
    pub fn involves(&self, staff_id: &str) -> bool {
        self.a == staff_id || self.b == staff_id
    }

    /// Whether this rule links the same unordered pair as `other`.
    pub fn same_pair(&self, other: &Rule) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Checks the rule against one slot's members.
    pub fn is_satisfied_by(&self, members: &[String]) -> bool {
        let has_a = members.iter().any(|m| *m == self.a);
        let has_b = members.iter().any(|m| *m == self.b);
        match self.kind {
            RuleKind::Never => !(has_a && has_b),
            RuleKind::Must => has_a == has_b,
        }
    }
}

/// Checks every rule against one slot's members.
pub fn all_satisfied(rules: &[Rule], members: &[String]) -> bool {
    rules.iter().all(|r| r.is_satisfied_by(members))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_never_rule() {
        let r = Rule::never("r1", "a", "b");
        assert_eq!(r.kind, RuleKind::Never);
        assert!(r.is_satisfied_by(&ids(&["a"])));
        assert!(r.is_satisfied_by(&ids(&["b", "c"])));
        assert!(r.is_satisfied_by(&[]));
        assert!(!r.is_satisfied_by(&ids(&["a", "c", "b"])));
    }

    #[test]
    fn test_must_rule_is_equivalence() {
        let r = Rule::must("r1", "a", "b");
        assert!(r.is_satisfied_by(&ids(&["a", "b"])));
        // Both absent is fine
        assert!(r.is_satisfied_by(&ids(&["c"])));
        assert!(!r.is_satisfied_by(&ids(&["a"])));
        assert!(!r.is_satisfied_by(&ids(&["b", "c"])));
    }

    #[test]
    fn test_involves_and_same_pair() {
        let r = Rule::must("r1", "a", "b");
        assert!(r.involves("a"));
        assert!(r.involves("b"));
        assert!(!r.involves("c"));
        assert!(r.same_pair(&Rule::never("r2", "b", "a")));
        assert!(!r.same_pair(&Rule::never("r3", "a", "c")));
    }

    #[test]
    fn test_all_satisfied() {
        let rules = vec![Rule::never("r1", "a", "b"), Rule::must("r2", "c", "d")];
        assert!(all_satisfied(&rules, &ids(&["a", "c", "d"])));
        assert!(!all_satisfied(&rules, &ids(&["a", "b"])));
        assert!(!all_satisfied(&rules, &ids(&["a", "c"])));
        assert!(all_satisfied(&[], &ids(&["a", "b"])));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let r = Rule::must("r1", "a", "b");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"kind\":\"must\""));
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
