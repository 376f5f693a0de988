//! Kruskal spanning-tree construction over a sorted edge list.
//!
//! Edges are visited in ascending weight. An edge joins the tree when its
//! endpoints lie in different components and is marked rejected otherwise.
//! Construction stops as soon as `n - 1` edges were accepted; edges after that
//! point keep [`EdgeMark::Unassigned`]. Nothing is removed from the edge list.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::edge::{Edge, EdgeMark};
use crate::graph::union_find::DisjointSet;

/// How component membership is tracked while building the tree.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentTracking {
    /// Disjoint-set forest, near-constant time per edge.
    #[default]
    UnionFind,
    /// Rescan all previously examined edges for every candidate and relabel
    /// groups on merge. Same result, quadratic per edge; for small inputs only.
    EdgeRescan,
}

/// Accepted edges in acceptance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningTree {
    /// Number of points the tree spans.
    pub point_count: usize,
    /// Accepted edges, ascending by weight.
    pub edges: Vec<Edge>,
    /// Position of each accepted edge in the sorted candidate list.
    pub source_indices: Vec<usize>,
}

impl SpanningTree {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of squared edge lengths; only meaningful for comparing trees.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// `true` once the tree holds `point_count - 1` edges.
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.point_count.saturating_sub(1)
    }

    /// Checks that the edges connect all points without forming a cycle.
    pub fn is_spanning(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        let mut sets = DisjointSet::new(self.point_count);
        for edge in &self.edges {
            if edge.a.index() >= self.point_count || edge.b.index() >= self.point_count {
                return false;
            }
            if sets.union(edge.a, edge.b).is_none() {
                return false;
            }
        }
        sets.component_count() <= 1
    }
}

/// Builds the minimum spanning tree from edges sorted by ascending weight.
///
/// `edges` is updated in place with the mark each examined edge received.
pub fn build_spanning_tree(
    point_count: usize,
    edges: &mut [Edge],
    tracking: ComponentTracking,
) -> SpanningTree {
    debug_assert!(
        edges.windows(2).all(|w| w[0].weight <= w[1].weight),
        "edges must be sorted by ascending weight"
    );

    let target = point_count.saturating_sub(1);
    let source_indices = match tracking {
        ComponentTracking::UnionFind => accept_with_union_find(point_count, edges, target),
        ComponentTracking::EdgeRescan => accept_with_rescan(edges, target),
    };

    debug!(
        accepted = source_indices.len(),
        examined = source_indices.last().map_or(0, |&i| i + 1),
        candidates = edges.len(),
        "Spanning tree construction finished."
    );

    SpanningTree {
        point_count,
        edges: source_indices.iter().map(|&i| edges[i]).collect(),
        source_indices,
    }
}

fn accept_with_union_find(point_count: usize, edges: &mut [Edge], target: usize) -> Vec<usize> {
    let mut sets = DisjointSet::new(point_count);
    let mut accepted = Vec::with_capacity(target);

    for (i, edge) in edges.iter_mut().enumerate() {
        if accepted.len() >= target {
            break;
        }
        match sets.union(edge.a, edge.b) {
            Some(root) => {
                edge.mark = EdgeMark::Group(root);
                accepted.push(i);
            }
            None => edge.mark = EdgeMark::Rejected,
        }
    }

    // Relabel with the final representatives so one component has one label.
    for &i in &accepted {
        let root = sets.find(edges[i].a);
        edges[i].mark = EdgeMark::Group(root);
    }

    accepted
}

fn accept_with_rescan(edges: &mut [Edge], target: usize) -> Vec<usize> {
    let mut accepted = Vec::with_capacity(target);
    let mut next_group = 0usize;

    for i in 0..edges.len() {
        if accepted.len() >= target {
            break;
        }
        let (examined, rest) = edges.split_at_mut(i);
        let edge = &mut rest[0];

        let mut group_a = None;
        let mut group_b = None;
        for prior in examined.iter() {
            let EdgeMark::Group(group) = prior.mark else {
                continue;
            };
            if prior.touches(edge.a) {
                group_a = Some(group);
            }
            if prior.touches(edge.b) {
                group_b = Some(group);
            }
            if group_a.is_some() && group_b.is_some() {
                break;
            }
        }

        if group_a.is_some() && group_a == group_b {
            edge.mark = EdgeMark::Rejected;
            continue;
        }

        let group = group_a.or(group_b).unwrap_or_else(|| {
            let fresh = next_group;
            next_group += 1;
            fresh
        });
        for prior in examined.iter_mut() {
            if let EdgeMark::Group(g) = prior.mark {
                if Some(g) == group_a || Some(g) == group_b {
                    prior.mark = EdgeMark::Group(group);
                }
            }
        }
        edge.mark = EdgeMark::Group(group);
        accepted.push(i);
    }

    accepted
}
