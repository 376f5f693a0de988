//! Per-pixel accumulation of kernel contributions over the spanning tree.
//!
//! Every pixel is independent: it reads the tree segments and configuration and
//! writes only its own slot. Rows are the unit of work, so the parallel path
//! hands disjoint row slices of the output buffer to a rayon pool and produces
//! exactly the same samples as the sequential path.
use glam::DVec2;
use rayon::prelude::*;

use crate::config::BlobConfig;
use crate::graph::SpanningTree;
use crate::raster::buffer::PixelBuffer;
use crate::raster::classify::classify;
use crate::raster::kernel::SegmentKernel;
use crate::raster::overlay::{near_point, near_segment, EDGE_OVERLAY_VALUE, POINT_OVERLAY_VALUE};
use crate::sampling::Point;

/// Renders a spanning tree into a square pixel buffer.
#[derive(Debug, Clone)]
pub struct Rasterizer<'a> {
    config: &'a BlobConfig,
    points: Vec<DVec2>,
    segments: Vec<(DVec2, DVec2)>,
    kernel: SegmentKernel,
    zoom_out: f64,
}

impl<'a> Rasterizer<'a> {
    /// Resolves tree edges to segments; point ids index into `points`.
    pub fn new(config: &'a BlobConfig, points: &[Point], tree: &SpanningTree) -> Self {
        let segments = tree
            .edges()
            .iter()
            .map(|e| {
                debug_assert!(e.a.index() < points.len() && e.b.index() < points.len());
                (points[e.a.index()].position, points[e.b.index()].position)
            })
            .collect();

        Self {
            config,
            points: points.iter().map(|p| p.position).collect(),
            segments,
            kernel: SegmentKernel::new(config.kernel_radius()),
            zoom_out: config.zoom_out(),
        }
    }

    pub fn segments(&self) -> &[(DVec2, DVec2)] {
        &self.segments
    }

    /// Maps a pixel index on one axis to normalized space.
    #[inline]
    pub fn pixel_to_domain(&self, pixel: u32) -> f64 {
        let u = pixel as f64 / self.config.resolution as f64;
        (u - 0.5) * self.zoom_out + 0.5
    }

    /// Normalized position of pixel `(px, py)`.
    #[inline]
    pub fn pixel_position(&self, px: u32, py: u32) -> DVec2 {
        DVec2::new(self.pixel_to_domain(px), self.pixel_to_domain(py))
    }

    /// Sum of kernel contributions of every tree edge at `p`.
    pub fn field_value(&self, p: DVec2) -> f64 {
        self.segments
            .iter()
            .map(|&(a, b)| self.kernel.contribution(a, b, p))
            .sum()
    }

    /// Final sample at `p`: point overlay, then edge overlay, then the
    /// classified kernel field.
    pub fn sample(&self, p: DVec2) -> f64 {
        if self.config.view_points && near_point(&self.points, p, self.config.point_overlay_radius())
        {
            return POINT_OVERLAY_VALUE;
        }
        if self.config.view_edges
            && near_segment(&self.segments, p, self.config.edge_overlay_radius())
        {
            return EDGE_OVERLAY_VALUE;
        }
        classify(
            self.field_value(p),
            self.config.output_mode,
            self.config.threshold,
        )
    }

    /// Renders classified samples, honoring the overlay flags.
    pub fn render(&self) -> PixelBuffer {
        self.fill(|p| self.sample(p))
    }

    /// Renders the unclassified kernel field without overlays.
    pub fn scalar_field(&self) -> PixelBuffer {
        self.fill(|p| self.field_value(p))
    }

    fn fill<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(DVec2) -> f64 + Sync,
    {
        let mut buffer = PixelBuffer::square(self.config.resolution);
        let width = buffer.width as usize;
        if width == 0 {
            return buffer;
        }

        let render_row = |(py, row): (usize, &mut [f64])| {
            let y = self.pixel_to_domain(py as u32);
            for (px, slot) in row.iter_mut().enumerate() {
                *slot = f(DVec2::new(self.pixel_to_domain(px as u32), y));
            }
        };

        if self.config.parallel {
            buffer
                .data
                .par_chunks_mut(width)
                .enumerate()
                .for_each(render_row);
        } else {
            buffer.data.chunks_mut(width).enumerate().for_each(render_row);
        }

        buffer
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::graph::{build_spanning_tree, enumerate_sorted_edges, ComponentTracking};
    use crate::raster::classify::{OutputMode, BACKGROUND};
    use crate::raster::overlay::segment_distance_squared;
    use crate::sampling::{points_from_coords, DiskRejectionSampling, PointSampling};

    fn tree_for(points: &[Point]) -> SpanningTree {
        let mut edges = enumerate_sorted_edges(points);
        build_spanning_tree(points.len(), &mut edges, ComponentTracking::UnionFind)
    }

    fn two_point_setup() -> (BlobConfig, Vec<Point>, SpanningTree) {
        let config = BlobConfig::default()
            .with_resolution(64)
            .with_min_spacing(0.05)
            .with_kernel_radius_multiplier(1.0);
        let points = points_from_coords(&[(0.3, 0.5), (0.7, 0.5)]);
        let tree = tree_for(&points);
        (config, points, tree)
    }

    #[test]
    fn pixel_mapping_zooms_out_around_centre() {
        let (config, points, tree) = two_point_setup();
        let raster = Rasterizer::new(&config, &points, &tree);
        assert!((raster.pixel_to_domain(32) - 0.5).abs() < 1e-12);
        assert!((raster.pixel_to_domain(0) - (0.5 - 0.5 * 1.05)).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_edge_outweighs_far_pixel() {
        let (config, points, tree) = two_point_setup();
        assert_eq!(tree.len(), 1);
        assert!((tree.edges[0].weight - 0.16).abs() < 1e-12);

        let raster = Rasterizer::new(&config, &points, &tree);
        let on_edge = raster.field_value(DVec2::new(0.5, 0.5));
        let far = raster.field_value(DVec2::new(0.5, 0.9));
        assert!(on_edge > far);
        assert_eq!(far, 0.0);
        assert_eq!(raster.sample(DVec2::new(0.5, 0.5)), 0.0);
        assert_eq!(raster.sample(DVec2::new(0.5, 0.9)), BACKGROUND);
    }

    #[test]
    fn empty_and_single_point_trees_render_background() {
        let config = BlobConfig::default().with_resolution(16);
        for points in [Vec::new(), points_from_coords(&[(0.5, 0.5)])] {
            let tree = tree_for(&points);
            let raster = Rasterizer::new(&config, &points, &tree);
            assert!(raster.scalar_field().data.iter().all(|&v| v == 0.0));
            assert!(raster.render().data.iter().all(|&v| v == BACKGROUND));
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = DiskRejectionSampling::with_spacing(0.1).generate(&mut rng);
        let tree = tree_for(&points);

        let sequential = BlobConfig::default()
            .with_resolution(48)
            .with_min_spacing(0.1);
        let parallel = sequential.clone().with_parallel(true);

        let a = Rasterizer::new(&sequential, &points, &tree).render();
        let b = Rasterizer::new(&parallel, &points, &tree).render();
        assert_eq!(a, b);
        assert!(a.foreground_count() > 0);
    }

    #[test]
    fn field_is_finite_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = DiskRejectionSampling::with_spacing(0.1).generate(&mut rng);
        let tree = tree_for(&points);
        let config = BlobConfig::default()
            .with_resolution(40)
            .with_min_spacing(0.1);
        let field = Rasterizer::new(&config, &points, &tree).scalar_field();
        assert!(field.data.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn vanishing_kernel_radius_keeps_field_finite() {
        let (config, points, tree) = two_point_setup();
        let config = config.with_kernel_radius_multiplier(2e-64);
        config.validate().expect("tiny multiplier is a valid config");
        let field = Rasterizer::new(&config, &points, &tree).scalar_field();
        assert!(field.data.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(Rasterizer::new(&config, &points, &tree)
            .render()
            .data
            .iter()
            .all(|&v| v == BACKGROUND));
    }

    #[test]
    fn raising_threshold_never_grows_the_dark_region() {
        let mut rng = StdRng::seed_from_u64(8);
        let points = DiskRejectionSampling::with_spacing(0.08).generate(&mut rng);
        let tree = tree_for(&points);
        let config = BlobConfig::default()
            .with_resolution(48)
            .with_min_spacing(0.08);
        let field = Rasterizer::new(&config, &points, &tree).scalar_field();

        let mut previous_dark = usize::MAX;
        let mut previous_light = 0;
        for threshold in [0.0, 0.1, 0.2, 0.4, 0.8, 1.6, 3.2] {
            let classified = field.classified(OutputMode::Threshold, threshold);
            let dark = classified.foreground_count();
            let light = classified.data.len() - dark;
            assert_eq!(dark, field.count_above(threshold));
            assert!(dark <= previous_dark);
            assert!(light >= previous_light);
            previous_dark = dark;
            previous_light = light;
        }
    }

    #[test]
    fn overlays_take_priority_points_over_edges() {
        let (config, points, tree) = two_point_setup();
        let config = config.with_view_points(true).with_view_edges(true);
        let raster = Rasterizer::new(&config, &points, &tree);

        assert_eq!(raster.sample(DVec2::new(0.3, 0.5)), POINT_OVERLAY_VALUE);
        assert_eq!(raster.sample(DVec2::new(0.5, 0.5)), EDGE_OVERLAY_VALUE);
        // Inside the kernel but off both overlays: classified field.
        assert_eq!(raster.sample(DVec2::new(0.5, 0.52)), 0.0);

        let edges_only = config.clone().with_view_points(false);
        let raster = Rasterizer::new(&edges_only, &points, &tree);
        assert_eq!(raster.sample(DVec2::new(0.3, 0.5)), EDGE_OVERLAY_VALUE);
    }

    #[test]
    fn edge_overlay_pixels_hug_the_tree() {
        let (config, points, tree) = two_point_setup();
        let config = config.with_resolution(128).with_view_edges(true);
        let raster = Rasterizer::new(&config, &points, &tree);
        let image = raster.render();
        let (a, b) = raster.segments()[0];
        let r2 = config.edge_overlay_radius().powi(2);

        let mut painted = 0;
        for py in 0..image.height {
            for px in 0..image.width {
                if image.get(px, py) == Some(EDGE_OVERLAY_VALUE) {
                    painted += 1;
                    let p = raster.pixel_position(px, py);
                    assert!(segment_distance_squared(a, b, p) < r2);
                }
            }
        }
        assert!(painted > 0);
    }
}
