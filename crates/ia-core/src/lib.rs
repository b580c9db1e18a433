/// Configuration, types, and shared structures for img2ascii.
///
/// This crate contains the image buffer, character ramps, ANSI escape
/// formatting and configuration logic used across the img2ascii workspace.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{CharacterRamp, LuminanceLut, RampPreset};
pub use config::{RenderConfig, ResizeFilter};
pub use error::CoreError;
pub use frame::{AsciiArt, ImageBuffer, Rgb};
