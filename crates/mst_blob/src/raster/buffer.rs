//! Square pixel storage for scalar fields and classified samples.
use crate::raster::classify::{classify, encode_gray, OutputMode, FOREGROUND};

/// Row-major grid of `f64` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f64>,
}

impl PixelBuffer {
    /// Creates a buffer with all samples set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Creates a square buffer.
    pub fn square(resolution: u32) -> Self {
        Self::new(resolution, resolution)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Sample at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Applies [`classify`] to every sample, producing a new buffer.
    pub fn classified(&self, mode: OutputMode, threshold: f64) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|&v| classify(v, mode, threshold))
                .collect(),
        }
    }

    /// Number of samples equal to the foreground level.
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// Number of samples strictly above `threshold`.
    pub fn count_above(&self, threshold: f64) -> usize {
        self.data.iter().filter(|&&v| v > threshold).count()
    }

    /// Largest sample, or `0.0` for an empty buffer.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// One 8-bit grey level per pixel.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| encode_gray(v)).collect()
    }

    /// Three equal 8-bit channels per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for &v in &self.data {
            let g = encode_gray(v);
            out.extend_from_slice(&[g, g, g]);
        }
        out
    }
}
