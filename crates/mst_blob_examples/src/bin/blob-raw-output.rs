use mst_blob::prelude::*;
use mst_blob_examples::{init_tracing, PngSink};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Soft rendering of the kernel field; a wider kernel smooths the blob.
    let config = BlobConfig::new(385_926)
        .with_resolution(1024)
        .with_kernel_radius_multiplier(1.5)
        .with_raw_output(true)
        .with_parallel(true);

    let mut events = FnSink::new(|event| {
        if let BlobEvent::TreeBuilt {
            edges,
            total_weight,
        } = event
        {
            info!("Tree has {edges} edges, squared-length sum {total_weight:.4}.");
        }
    });
    let result = generate_blob_with_events(&config, &mut events)?;

    let saturated = result.image.data.iter().filter(|&&v| v >= 1.0).count();
    if saturated > 0 {
        warn!(
            "{saturated} pixels reached the clamp at {}x normalization.",
            RAW_NORMALIZATION
        );
    }

    result.write_to(&mut PngSink::new("blob-raw-output.png"))?;

    Ok(())
}
