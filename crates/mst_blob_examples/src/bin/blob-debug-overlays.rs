use mst_blob::prelude::*;
use mst_blob_examples::{init_tracing, PngSink};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Points and tree edges drawn on top of the thresholded blob.
    let config = BlobConfig::new(2025)
        .with_resolution(1024)
        .with_min_spacing(0.06)
        .with_view_points(true)
        .with_view_edges(true)
        .with_parallel(true);

    let mut sink = PngSink::new("blob-debug-overlays.png");
    let result = generate_blob_into(&config, &mut sink)?;

    let rejected = result.edges.iter().filter(|e| e.is_rejected()).count();
    info!(
        "Points: {}, tree edges: {}, rejected candidates: {}.",
        result.points.len(),
        result.tree.len(),
        rejected
    );

    Ok(())
}
