//! Disk-constrained rejection sampling with a minimum spacing.
//!
//! A relaxed take on Poisson disk sampling: a fixed budget of uniform
//! candidates is drawn over the unit square and every candidate outside the
//! disk of radius 0.5 around `(0.5, 0.5)`, or closer than `min_spacing` to an
//! already accepted point, is discarded. Packing is not optimal, but the output
//! is fully determined by the RNG stream.
use glam::DVec2;
use rand::RngCore;

use crate::sampling::{rand01, Point, PointSampling};

/// Centre of the sampling disk.
pub const DISK_CENTER: DVec2 = DVec2::new(0.5, 0.5);
/// Squared radius of the sampling disk.
pub const DISK_RADIUS_SQUARED: f64 = 0.25;

/// Hexagonal circle packing density, used to size the output buffer.
const PACKING_DENSITY: f64 = 0.9069;

/// Rejection sampler over the centred disk.
#[derive(Debug, Clone)]
pub struct DiskRejectionSampling {
    /// Minimum distance between accepted points.
    pub min_spacing: f64,
    /// Number of candidates to draw.
    pub max_attempts: usize,
}

impl DiskRejectionSampling {
    /// Creates a sampler with an explicit attempt budget.
    pub fn new(min_spacing: f64, max_attempts: usize) -> Self {
        Self {
            min_spacing,
            max_attempts,
        }
    }

    /// Creates a sampler whose budget is `floor(1 / min_spacing^2)`.
    pub fn with_spacing(min_spacing: f64) -> Self {
        let max_attempts = if min_spacing.is_finite() && min_spacing > 0.0 {
            (1.0 / (min_spacing * min_spacing)).floor() as usize
        } else {
            0
        };
        Self::new(min_spacing, max_attempts)
    }

    fn capacity_hint(&self) -> usize {
        let bound = PACKING_DENSITY / 4.0 / (self.min_spacing * self.min_spacing);
        (bound as usize).min(self.max_attempts)
    }
}

impl PointSampling for DiskRejectionSampling {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Point> {
        if !self.min_spacing.is_finite() || self.min_spacing <= 0.0 {
            return Vec::new();
        }

        let spacing_squared = self.min_spacing * self.min_spacing;
        let mut accepted: Vec<Point> = Vec::with_capacity(self.capacity_hint());

        for _ in 0..self.max_attempts {
            let x = rand01(rng);
            let y = rand01(rng);
            let candidate = DVec2::new(x, y);

            if candidate.distance_squared(DISK_CENTER) > DISK_RADIUS_SQUARED {
                continue;
            }

            let too_close = accepted
                .iter()
                .any(|p| p.position.distance_squared(candidate) < spacing_squared);
            if too_close {
                continue;
            }

            let id = accepted.len();
            accepted.push(Point::new(id, x, y));
        }

        accepted
    }
}
