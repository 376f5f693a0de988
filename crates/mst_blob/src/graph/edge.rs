//! Candidate edge enumeration and ordering.
//!
//! Every unordered pair of points becomes an [`Edge`] weighted by the squared
//! distance between its endpoints. Squared distance orders exactly like true
//! distance, so it is only ever compared, never summed into lengths.
use crate::sampling::{Point, PointId};

/// Label assigned to an edge by the spanning-tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMark {
    /// Not examined; either not reached yet or past tree completion.
    #[default]
    Unassigned,
    /// Accepted into the tree as part of the given component.
    Group(usize),
    /// Rejected because both endpoints already shared a component.
    Rejected,
}

/// An undirected candidate connection between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: PointId,
    pub b: PointId,
    /// Squared Euclidean length.
    pub weight: f64,
    pub mark: EdgeMark,
}

impl Edge {
    /// Creates an unassigned edge between `a` and `b`.
    pub fn between(a: &Point, b: &Point) -> Self {
        debug_assert!(a.id != b.id, "edge endpoints must be distinct points");
        Self {
            a: a.id,
            b: b.id,
            weight: a.distance_squared(b),
            mark: EdgeMark::Unassigned,
        }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self.mark, EdgeMark::Group(_))
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.mark == EdgeMark::Rejected
    }

    /// Returns `true` if `id` is one of the endpoints.
    #[inline]
    pub fn touches(&self, id: PointId) -> bool {
        self.a == id || self.b == id
    }
}

/// Number of unordered pairs over `n` points.
#[inline]
pub fn edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Enumerates every unordered pair `(i, j)` with `i < j`, in index order.
pub fn enumerate_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(points.len()));
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            edges.push(Edge::between(a, b));
        }
    }
    edges
}

/// Sorts edges by ascending weight.
///
/// The sort is stable and uses a total order on `f64`, so equal weights keep
/// their enumeration order and sub-unit differences are never truncated away.
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(|e1, e2| e1.weight.total_cmp(&e2.weight));
}

/// Enumerates all candidate edges and sorts them by weight.
pub fn enumerate_sorted_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = enumerate_edges(points);
    sort_edges(&mut edges);
    edges
}
