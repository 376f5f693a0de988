//! Candidate edges and minimum spanning tree construction.
//!
//! [`edge`] enumerates and orders all point pairs, [`union_find`] tracks
//! connected components and [`kruskal`] turns the ordered list into a
//! [`SpanningTree`].
pub mod edge;
pub mod kruskal;
pub mod union_find;

pub use edge::{edge_count, enumerate_edges, enumerate_sorted_edges, sort_edges, Edge, EdgeMark};
pub use kruskal::{build_spanning_tree, ComponentTracking, SpanningTree};
pub use union_find::DisjointSet;
