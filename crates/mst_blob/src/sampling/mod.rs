//! Point sampling for the blob pipeline.
//!
//! This module defines the [`Point`] type shared by every downstream stage, the
//! [`PointSampling`] trait, and the disk rejection sampler used by default.
use glam::DVec2;
use rand::RngCore;

pub mod disk_rejection;

pub use disk_rejection::DiskRejectionSampling;

/// Stable identity of a sampled point; its index in the sampler output.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable point in normalized `[0, 1] x [0, 1]` space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Identity assigned at creation.
    pub id: PointId,
    /// Normalized position.
    pub position: DVec2,
}

impl Point {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id: PointId(id),
            position: DVec2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.position.distance_squared(other.position)
    }
}

/// Builds a point set from raw coordinates, assigning ids in order.
pub fn points_from_coords(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Point::new(i, x, y))
        .collect()
}

/// Trait for point sampling.
pub trait PointSampling: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Point>;
}

/// Generate a random float in the range [0, 1) with 53 bits of precision.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
