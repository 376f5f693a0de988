//! Mapping accumulated kernel values to output samples.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Divisor applied to raw kernel values before clamping.
///
/// Empirical rather than derived from the kernel's bounds: some seeds and
/// parameters can still push values past 1, which the clamp absorbs.
pub const RAW_NORMALIZATION: f64 = 2.5;

/// Sample written for pixels classified inside the blob.
pub const FOREGROUND: f64 = 0.0;
/// Sample written for background pixels.
pub const BACKGROUND: f64 = 1.0;

/// Selects how kernel values become samples.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Black where the value exceeds the threshold, white elsewhere.
    #[default]
    Threshold,
    /// Soft rendering: value over [`RAW_NORMALIZATION`], clamped to 1.
    Raw,
}

/// Classifies an accumulated kernel value.
#[inline]
pub fn classify(value: f64, mode: OutputMode, threshold: f64) -> f64 {
    match mode {
        OutputMode::Threshold => {
            if value > threshold {
                FOREGROUND
            } else {
                BACKGROUND
            }
        }
        OutputMode::Raw => (value / RAW_NORMALIZATION).clamp(0.0, 1.0),
    }
}

/// Encodes a sample in `[0, 1]` as an 8-bit grey level.
#[inline]
pub fn encode_gray(sample: f64) -> u8 {
    (sample.clamp(0.0, 1.0) * 255.0).round() as u8
}
