/// ASCII conversion engine for img2ascii.
///
/// Maps resized pixels to ramp glyphs and assembles the output lines.
pub mod luminance;
pub mod render;

pub use luminance::{luminance, map_to_char};
pub use render::render;
