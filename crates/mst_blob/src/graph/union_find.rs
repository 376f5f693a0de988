//! Disjoint-set forest keyed by [`PointId`].
use std::cmp::Ordering;

use crate::sampling::PointId;

/// Union-find with path compression and union by size.
///
/// Elements are the dense point ids `0..len`. Every element starts as its own
/// singleton component.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Finds the representative of `id`, compressing the path to the root.
    pub fn find(&mut self, id: PointId) -> usize {
        let mut root = id.index();
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut cur = id.index();
        while self.parents[cur] != root {
            let next = self.parents[cur];
            self.parents[cur] = root;
            cur = next;
        }

        root
    }

    /// Returns `true` if `a` and `b` share a component.
    pub fn same_set(&mut self, a: PointId, b: PointId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns the representative of the merged component, or `None` if both
    /// were already in the same component.
    pub fn union(&mut self, a: PointId, b: PointId) -> Option<usize> {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return None;
        }

        let (big, small) = match self.sizes[root_a].cmp(&self.sizes[root_b]) {
            Ordering::Less => (root_b, root_a),
            // ties keep the lower id's root for stable labels
            Ordering::Equal if root_b < root_a => (root_b, root_a),
            _ => (root_a, root_b),
        };
        self.parents[small] = big;
        self.sizes[big] += self.sizes[small];
        self.components -= 1;
        Some(big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets.component_count(), 4);
        for i in 0..4 {
            assert_eq!(sets.find(PointId(i)), i);
        }
    }

    #[test]
    fn union_merges_and_reports_redundant_merges() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(PointId(0), PointId(1)).is_some());
        assert!(sets.union(PointId(2), PointId(3)).is_some());
        assert!(sets.union(PointId(1), PointId(3)).is_some());
        assert_eq!(sets.union(PointId(0), PointId(2)), None);

        assert!(sets.same_set(PointId(0), PointId(3)));
        assert!(!sets.same_set(PointId(0), PointId(4)));
        assert_eq!(sets.component_count(), 2);
    }

    #[test]
    fn smaller_component_joins_larger() {
        let mut sets = DisjointSet::new(4);
        sets.union(PointId(1), PointId(2));
        sets.union(PointId(1), PointId(3));
        let root = sets.find(PointId(1));
        assert_eq!(sets.union(PointId(0), PointId(3)), Some(root));
    }

    #[test]
    fn long_chains_are_compressed() {
        let n = 64;
        let mut sets = DisjointSet::new(n);
        for i in 1..n {
            sets.union(PointId(i - 1), PointId(i));
        }
        let root = sets.find(PointId(n - 1));
        for i in 0..n {
            assert_eq!(sets.find(PointId(i)), root);
        }
        assert_eq!(sets.component_count(), 1);
    }

    #[test]
    fn empty_forest() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert_eq!(sets.component_count(), 0);
    }
}
