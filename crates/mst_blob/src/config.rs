//! Immutable configuration consumed by every pipeline stage.
//!
//! A [`BlobConfig`] is built once (via [`Default`] and the `with_*` builders),
//! validated with [`BlobConfig::validate`], and then passed by reference into the
//! sampler, the spanning-tree builder and the rasterizer. Derived quantities such
//! as the kernel radius or the sampling attempt budget are methods so they can
//! never drift from the fields they are computed from.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::ComponentTracking;
use crate::raster::OutputMode;

/// Seed used when none is specified.
pub const DEFAULT_SEED: u64 = 385_926;
/// Default output width and height in pixels.
pub const DEFAULT_RESOLUTION: u32 = 2048;
/// Default minimum distance between sampled points in normalized units.
pub const DEFAULT_MIN_SPACING: f64 = 0.05;
/// Default kernel radius as a multiple of the minimum spacing.
pub const DEFAULT_KERNEL_RADIUS_MULTIPLIER: f64 = 1.0;
/// Default classification cutoff in threshold mode.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Spacing at which the debug overlay radii were tuned.
const OVERLAY_REFERENCE_SPACING: f64 = 0.05;

/// Configuration for generating a blob image.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct BlobConfig {
    /// Seed for the point sampler's random number generator.
    pub seed: u64,
    /// Output raster width and height in pixels.
    pub resolution: u32,
    /// Minimum separation between sampled points; also scales the kernel radius.
    pub min_spacing: f64,
    /// Kernel radius relative to `min_spacing`.
    pub kernel_radius_multiplier: f64,
    /// Cutoff used by [`OutputMode::Threshold`].
    pub threshold: f64,
    /// How accumulated kernel values are mapped to samples.
    pub output_mode: OutputMode,
    /// Paint sample points over the kernel field.
    pub view_points: bool,
    /// Paint tree edges over the kernel field.
    pub view_edges: bool,
    /// Distribute raster rows over a thread pool.
    pub parallel: bool,
    /// Component tracking used while building the spanning tree.
    pub component_tracking: ComponentTracking,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            resolution: DEFAULT_RESOLUTION,
            min_spacing: DEFAULT_MIN_SPACING,
            kernel_radius_multiplier: DEFAULT_KERNEL_RADIUS_MULTIPLIER,
            threshold: DEFAULT_THRESHOLD,
            output_mode: OutputMode::Threshold,
            view_points: false,
            view_edges: false,
            parallel: false,
            component_tracking: ComponentTracking::UnionFind,
        }
    }
}

impl BlobConfig {
    /// Creates a default configuration with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the output resolution.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the minimum point spacing.
    pub fn with_min_spacing(mut self, min_spacing: f64) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    /// Sets the kernel radius multiplier.
    pub fn with_kernel_radius_multiplier(mut self, multiplier: f64) -> Self {
        self.kernel_radius_multiplier = multiplier;
        self
    }

    /// Sets the classification threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the output mode.
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Toggles raw output; `false` selects threshold mode.
    pub fn with_raw_output(mut self, raw: bool) -> Self {
        self.output_mode = if raw {
            OutputMode::Raw
        } else {
            OutputMode::Threshold
        };
        self
    }

    /// Enables or disables the sample point overlay.
    pub fn with_view_points(mut self, view_points: bool) -> Self {
        self.view_points = view_points;
        self
    }

    /// Enables or disables the tree edge overlay.
    pub fn with_view_edges(mut self, view_edges: bool) -> Self {
        self.view_edges = view_edges;
        self
    }

    /// Enables or disables row-parallel rasterization.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the component tracking strategy of the spanning-tree builder.
    pub fn with_component_tracking(mut self, tracking: ComponentTracking) -> Self {
        self.component_tracking = tracking;
        self
    }

    /// Kernel radius `R` in normalized units.
    pub fn kernel_radius(&self) -> f64 {
        self.kernel_radius_multiplier * self.min_spacing
    }

    /// Field-of-view scale; leaves room for the kernel around the unit square.
    pub fn zoom_out(&self) -> f64 {
        1.0 + self.kernel_radius()
    }

    /// Number of candidates the sampler draws, `floor(1 / spacing^2)`.
    pub fn max_attempts(&self) -> usize {
        (1.0 / (self.min_spacing * self.min_spacing)).floor() as usize
    }

    /// Radius of the dots painted by the point overlay.
    pub fn point_overlay_radius(&self) -> f64 {
        (1.0 / 256.0) * (self.min_spacing / OVERLAY_REFERENCE_SPACING)
    }

    /// Half-width of the lines painted by the edge overlay.
    pub fn edge_overlay_radius(&self) -> f64 {
        (1.0 / 512.0) * (self.min_spacing / OVERLAY_REFERENCE_SPACING)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(Error::InvalidConfig("resolution must be > 0".into()));
        }
        if !self.min_spacing.is_finite() || self.min_spacing <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_spacing must be finite and > 0".into(),
            ));
        }
        if !self.kernel_radius_multiplier.is_finite() || self.kernel_radius_multiplier < 0.0 {
            return Err(Error::InvalidConfig(
                "kernel_radius_multiplier must be finite and >= 0".into(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(Error::InvalidConfig("threshold must be finite".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_constants() {
        let config = BlobConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.resolution, 2048);
        assert_eq!(config.output_mode, OutputMode::Threshold);
        assert!(!config.view_points && !config.view_edges && !config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn derived_values_follow_spacing() {
        let config = BlobConfig::new(1)
            .with_min_spacing(0.05)
            .with_kernel_radius_multiplier(2.0);
        assert!((config.kernel_radius() - 0.1).abs() < 1e-12);
        assert!((config.zoom_out() - 1.1).abs() < 1e-12);
        assert_eq!(config.max_attempts(), 399);
        assert!((config.point_overlay_radius() - 1.0 / 256.0).abs() < 1e-12);
        assert!((config.edge_overlay_radius() - 1.0 / 512.0).abs() < 1e-12);
    }

    #[test]
    fn max_attempts_grows_as_spacing_shrinks() {
        let coarse = BlobConfig::default().with_min_spacing(0.1);
        let fine = BlobConfig::default().with_min_spacing(0.02);
        assert!(fine.max_attempts() > coarse.max_attempts());
        assert_eq!(fine.max_attempts(), 2500);
    }

    #[test]
    fn raw_output_toggle_selects_mode() {
        let config = BlobConfig::default().with_raw_output(true);
        assert_eq!(config.output_mode, OutputMode::Raw);
        let config = config.with_raw_output(false);
        assert_eq!(config.output_mode, OutputMode::Threshold);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(matches!(
            BlobConfig::default().with_resolution(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(BlobConfig::default()
            .with_min_spacing(0.0)
            .validate()
            .is_err());
        assert!(BlobConfig::default()
            .with_min_spacing(-0.1)
            .validate()
            .is_err());
        assert!(BlobConfig::default()
            .with_min_spacing(f64::NAN)
            .validate()
            .is_err());
        assert!(BlobConfig::default()
            .with_kernel_radius_multiplier(-1.0)
            .validate()
            .is_err());
        assert!(BlobConfig::default()
            .with_threshold(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn zero_kernel_radius_is_accepted() {
        let config = BlobConfig::default().with_kernel_radius_multiplier(0.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.kernel_radius(), 0.0);
    }
}
