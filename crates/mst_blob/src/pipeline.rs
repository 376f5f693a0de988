//! High-level driver running sampling, tree construction and rasterization.
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::BlobConfig;
use crate::error::{Error, Result};
use crate::events::{BlobEvent, BlobEventKind, EventSink};
use crate::graph::{build_spanning_tree, enumerate_sorted_edges, Edge, SpanningTree};
use crate::raster::{PixelBuffer, Rasterizer};
use crate::sampling::{DiskRejectionSampling, Point, PointSampling};
use crate::sink::ImageSink;

/// Everything produced by one run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct BlobResult {
    /// Sampled points; `points[i].id == PointId(i)`.
    pub points: Vec<Point>,
    /// All candidate edges in sorted order, with the marks left by the tree builder.
    pub edges: Vec<Edge>,
    /// Minimum spanning tree over `points`.
    pub tree: SpanningTree,
    /// Classified output samples.
    pub image: PixelBuffer,
}

impl BlobResult {
    /// Hands the image to `sink`. The result stays usable if the sink fails.
    pub fn write_to(&self, sink: &mut dyn ImageSink) -> Result<()> {
        sink.write(&self.image)
    }
}

pub struct BlobGenerator {
    /// Validated configuration applied to every run.
    pub config: BlobConfig,
}

impl BlobGenerator {
    pub fn try_new(config: BlobConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: BlobConfig) -> Self {
        debug_assert!(config.resolution > 0, "resolution must be > 0");
        debug_assert!(config.min_spacing > 0.0, "min_spacing must be > 0");
        Self { config }
    }

    /// Runs the full pipeline.
    pub fn run(&self) -> BlobResult {
        run_pipeline(&self.config, &mut ())
    }

    pub fn run_with_events(&self, sink: &mut dyn EventSink) -> BlobResult {
        run_pipeline(&self.config, sink)
    }

    /// Samples the point set only.
    pub fn sample_points(&self) -> Vec<Point> {
        sample_points(&self.config)
    }
}

/// Validates `config` and runs the full pipeline.
pub fn generate_blob(config: &BlobConfig) -> Result<BlobResult> {
    config.validate()?;
    Ok(run_pipeline(config, &mut ()))
}

/// Like [`generate_blob`], reporting progress to `sink`.
pub fn generate_blob_with_events(
    config: &BlobConfig,
    sink: &mut dyn EventSink,
) -> Result<BlobResult> {
    if let Err(e) = config.validate() {
        if sink.wants(BlobEventKind::Warning) {
            sink.send(BlobEvent::Warning {
                context: "config".into(),
                message: e.to_string(),
            });
        }
        return Err(e);
    }
    Ok(run_pipeline(config, sink))
}

/// Runs the pipeline and writes the image to `image_sink`.
///
/// A sink failure is returned as [`Error::Sink`]; the computation itself
/// cannot fail once the configuration is valid.
pub fn generate_blob_into(
    config: &BlobConfig,
    image_sink: &mut dyn ImageSink,
) -> Result<BlobResult> {
    let result = generate_blob(config)?;
    result.write_to(image_sink).map_err(|e| match e {
        Error::Sink(_) => e,
        other => Error::Sink(other.to_string()),
    })?;
    Ok(result)
}

/// Samples points for `config` from a freshly seeded generator.
pub fn sample_points(config: &BlobConfig) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    DiskRejectionSampling::new(config.min_spacing, config.max_attempts()).generate(&mut rng)
}

fn run_pipeline(config: &BlobConfig, sink: &mut dyn EventSink) -> BlobResult {
    if sink.wants(BlobEventKind::RunStarted) {
        sink.send(BlobEvent::RunStarted {
            config: config.clone(),
        });
    }
    debug!(
        seed = config.seed,
        resolution = config.resolution,
        kernel_radius = config.kernel_radius(),
        zoom_out = config.zoom_out(),
        max_attempts = config.max_attempts(),
        "Derived blob parameters."
    );

    let points = sample_points(config);
    info!("Generated points: {}.", points.len());
    if sink.wants(BlobEventKind::PointsSampled) {
        sink.send(BlobEvent::PointsSampled {
            count: points.len(),
            attempts: config.max_attempts(),
        });
    }
    if points.len() < 2 {
        warn!(
            "Only {} point(s) sampled; the image will be background only.",
            points.len()
        );
        if sink.wants(BlobEventKind::Warning) {
            sink.send(BlobEvent::Warning {
                context: "sampling".into(),
                message: format!("Degenerate point set of size {}", points.len()),
            });
        }
    }

    let mut edges = enumerate_sorted_edges(&points);
    info!("Generated and sorted edges: {}.", edges.len());
    if sink.wants(BlobEventKind::EdgesEnumerated) {
        sink.send(BlobEvent::EdgesEnumerated { count: edges.len() });
    }

    let tree = build_spanning_tree(points.len(), &mut edges, config.component_tracking);
    info!("Generated tree, edges: {}.", tree.len());
    if sink.wants(BlobEventKind::TreeBuilt) {
        sink.send(BlobEvent::TreeBuilt {
            edges: tree.len(),
            total_weight: tree.total_weight(),
        });
    }

    let image = Rasterizer::new(config, &points, &tree).render();
    info!(
        "Generated image: {}x{}{}.",
        image.width,
        image.height,
        if config.parallel { " (parallel)" } else { "" }
    );
    if sink.wants(BlobEventKind::RasterFinished) {
        sink.send(BlobEvent::RasterFinished {
            resolution: config.resolution,
            foreground: image.foreground_count(),
        });
    }

    if sink.wants(BlobEventKind::RunFinished) {
        sink.send(BlobEvent::RunFinished {
            points: points.len(),
            tree_edges: tree.len(),
        });
    }

    BlobResult {
        points,
        edges,
        tree,
        image,
    }
}
