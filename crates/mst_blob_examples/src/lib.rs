#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, save_gray_png, save_png, PngSink};
