//! Seam for handing finished pixel buffers to the outside world.
//!
//! The core never touches files or windows itself; callers plug in an
//! [`ImageSink`] (a PNG writer, a preview window, a test collector). A failing
//! sink does not invalidate the buffer it was given.
use crate::error::Result;
use crate::raster::PixelBuffer;

/// Destination for a completed pixel buffer.
pub trait ImageSink {
    fn write(&mut self, image: &PixelBuffer) -> Result<()>;
}

/// Keeps copies of every buffer written to it.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub images: Vec<PixelBuffer>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for MemorySink {
    fn write(&mut self, image: &PixelBuffer) -> Result<()> {
        self.images.push(image.clone());
        Ok(())
    }
}

impl<S: ImageSink + ?Sized> ImageSink for &mut S {
    fn write(&mut self, image: &PixelBuffer) -> Result<()> {
        (**self).write(image)
    }
}
