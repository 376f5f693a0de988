use mst_blob::prelude::*;
use mst_blob_examples::{init_tracing, PngSink};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Default parameters at a resolution that renders in a few seconds.
    let config = BlobConfig::default()
        .with_resolution(1024)
        .with_parallel(true);

    let generator = BlobGenerator::try_new(config)?;
    let result = generator.run();

    let mut sink = PngSink::new("blob-basic.png");
    result.write_to(&mut sink)?;

    Ok(())
}
