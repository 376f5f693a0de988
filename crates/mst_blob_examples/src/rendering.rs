//! PNG output and logging setup shared by the example binaries.
use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage};
use mst_blob::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Image sink writing lossless PNG files.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
    grayscale: bool,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            grayscale: false,
        }
    }

    /// Writes single-channel PNGs instead of RGB.
    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, image: &PixelBuffer) -> mst_blob::error::Result<()> {
        let saved = if self.grayscale {
            save_gray_png(image, &self.path)
        } else {
            save_png(image, &self.path)
        };
        saved.map_err(|e| Error::Sink(format!("{e:#}")))
    }
}

/// Encodes `buffer` as an RGB PNG at `path`.
pub fn save_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let img = RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match its dimensions"))?;
    img.save(path)
        .map_err(|e| anyhow::anyhow!("failed to write '{}': {e}", path.display()))?;
    info!("Saved image to '{}'.", path.display());
    Ok(())
}

/// Encodes `buffer` as a single-channel PNG at `path`.
pub fn save_gray_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let img = GrayImage::from_raw(buffer.width, buffer.height, buffer.to_luma8())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match its dimensions"))?;
    img.save(path)
        .map_err(|e| anyhow::anyhow!("failed to write '{}': {e}", path.display()))?;
    info!("Saved grayscale image to '{}'.", path.display());
    Ok(())
}
