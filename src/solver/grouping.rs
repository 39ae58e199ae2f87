//! Union-find grouping of a slot's pool by `Must` rules.
//!
//! Staff linked (directly or transitively) by `Must` rules whose both
//! endpoints are in the pool form one group. The search adds a group as
//! a unit, so a group is never half-included by an include step.

use crate::models::{Rule, RuleKind};

/// Disjoint-set forest over pool positions.
///
/// Scoped to one slot's pool and dropped once the slot is resolved.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Representative of `x`, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`; `x`'s representative survives.
    pub fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx != ry {
            self.parent[ry] = rx;
        }
    }
}

/// Groups of pool positions that share membership status.
#[derive(Debug, Clone)]
pub struct PoolGroups {
    /// Members of each group, in pool order.
    groups: Vec<Vec<usize>>,
    /// Group index of each pool position.
    group_of: Vec<usize>,
}

impl PoolGroups {
    /// Groups `pool` by the `Must` rules whose endpoints are both in it.
    pub fn build(pool: &[String], rules: &[Rule]) -> Self {
        let position = |id: &str| pool.iter().position(|s| s == id);

        let mut uf = UnionFind::new(pool.len());
        for rule in rules.iter().filter(|r| r.kind == RuleKind::Must) {
            if let (Some(a), Some(b)) = (position(&rule.a), position(&rule.b)) {
                uf.union(a, b);
            }
        }

        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut root_group: Vec<Option<usize>> = vec![None; pool.len()];
        let mut group_of = vec![0; pool.len()];
        for (i, slot) in group_of.iter_mut().enumerate() {
            let root = uf.find(i);
            let g = *root_group[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[g].push(i);
            *slot = g;
        }

        Self { groups, group_of }
    }

    /// Members of the group containing pool position `i`.
    pub fn members_of(&self, i: usize) -> &[usize] {
        &self.groups[self.group_of[i]]
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the pool was empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
