//! Kernel rasterization of a spanning tree.
//!
//! [`kernel`] integrates the radial kernel along a single segment in closed
//! form, [`rasterizer`] accumulates it over all tree edges per pixel,
//! [`classify`] maps accumulated values to samples and [`overlay`] paints the
//! optional debug views. Results land in a [`PixelBuffer`].
pub mod buffer;
pub mod classify;
pub mod kernel;
pub mod overlay;
pub mod rasterizer;

pub use buffer::PixelBuffer;
pub use classify::{classify, encode_gray, OutputMode, BACKGROUND, FOREGROUND, RAW_NORMALIZATION};
pub use kernel::{SegmentKernel, SegmentQuadratic};
pub use rasterizer::Rasterizer;
