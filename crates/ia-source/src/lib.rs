/// Visual source modules for img2ascii: decoding and resampling.

pub mod image;
pub mod resize;

pub use resize::{ASPECT_CORRECTION, resample, resample_with, target_height};
