use mst_blob::graph::{build_spanning_tree, enumerate_sorted_edges};
use mst_blob::prelude::*;
use mst_blob_examples::{init_tracing, PngSink};
use tracing::info;

const THRESHOLDS: [f64; 5] = [0.1, 0.25, 0.4, 0.7, 1.0];

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = BlobConfig::new(7)
        .with_resolution(512)
        .with_parallel(true);
    config.validate()?;

    // Sample, connect and integrate once; only the classification changes.
    let points = sample_points(&config);
    let mut edges = enumerate_sorted_edges(&points);
    let tree = build_spanning_tree(points.len(), &mut edges, config.component_tracking);
    let field = Rasterizer::new(&config, &points, &tree).scalar_field();
    info!("Field maximum: {:.3}.", field.max_value());

    for threshold in THRESHOLDS {
        let image = field.classified(OutputMode::Threshold, threshold);
        info!(
            "Threshold {threshold:.2}: {} foreground pixels.",
            image.foreground_count()
        );
        PngSink::new(format!("blob-threshold-{threshold:.2}.png"))
            .with_grayscale(true)
            .write(&image)?;
    }

    Ok(())
}
