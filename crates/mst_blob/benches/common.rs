#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};

/// Sampling and tree building finish in microseconds to low milliseconds.
pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

/// Rasterization costs pixels times tree edges per iteration, so fewer and
/// longer samples are taken.
pub const RASTER_SAMPLE_SIZE: usize = 10;
pub const RASTER_WARM_UP: Duration = Duration::from_secs(2);
pub const RASTER_MEASUREMENT_TIME: Duration = Duration::from_secs(8);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn raster_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(RASTER_SAMPLE_SIZE)
        .warm_up_time(RASTER_WARM_UP)
        .measurement_time(RASTER_MEASUREMENT_TIME)
}

/// Counts pixels (or points, or edges) per iteration; never reports zero.
pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}
