#![forbid(unsafe_code)]
//! mst_blob: connected blob shapes from a minimum spanning tree and an analytic blur kernel.
//!
//! Modules:
//! - sampling: seeded rejection sampling of points inside a disk
//! - graph: candidate edge enumeration, union-find and Kruskal spanning trees
//! - raster: closed-form kernel integration, classification, overlays and pixel buffers
//! - pipeline: the driver tying the stages together, plus events and image sinks
//!
//! For examples, see the `mst_blob_examples` crate.
pub mod config;
pub mod error;
pub mod events;
pub mod graph;
pub mod pipeline;
pub mod raster;
pub mod sampling;
pub mod sink;

/// Convenient re-exports for common types. Import with `use mst_blob::prelude::*;`.
pub mod prelude {
    pub use crate::config::BlobConfig;
    pub use crate::error::{Error, Result};
    pub use crate::events::{BlobEvent, BlobEventKind, EventSink, FnSink, VecSink};
    pub use crate::graph::{
        build_spanning_tree, enumerate_sorted_edges, ComponentTracking, DisjointSet, Edge,
        EdgeMark, SpanningTree,
    };
    pub use crate::pipeline::{
        generate_blob, generate_blob_into, generate_blob_with_events, sample_points,
        BlobGenerator, BlobResult,
    };
    pub use crate::raster::{OutputMode, PixelBuffer, Rasterizer, RAW_NORMALIZATION};
    pub use crate::sampling::{DiskRejectionSampling, Point, PointId, PointSampling};
    pub use crate::sink::{ImageSink, MemorySink};
}
