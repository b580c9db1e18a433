use ia_core::charset::LuminanceLut;
use ia_core::color::{ColorLayer, write_colored_glyph};
use ia_core::config::RenderConfig;
use ia_core::error::CoreError;
use ia_core::frame::{AsciiArt, ImageBuffer};
use rayon::prelude::*;

use crate::luminance::map_pixel;

// "\x1b[38;2;255;255;255m" + glyph + "\x1b[0m", worst case in bytes.
const COLORED_CELL_BYTES: usize = 19 + 4 + 4;

/// Render a resized buffer into one line per pixel row.
///
/// Each pixel becomes one ramp glyph. When color applies (see
/// [`RenderConfig::color_layer`]) the glyph is wrapped in a truecolor escape
/// for the pixel's RGB and followed by its own reset, so no color state
/// survives a cell.
///
/// Rows are rendered in parallel; the result is identical to a sequential
/// pass.
///
/// # Errors
/// Returns an invalid-input error if the buffer is empty or malformed, or if
/// the ramp is empty. `target_width` is not consulted: the buffer is taken
/// as already resized.
///
/// # Example
/// ```
/// use ia_ascii::render::render;
/// use ia_core::config::RenderConfig;
/// use ia_core::frame::ImageBuffer;
///
/// let img = ImageBuffer::from_pixels(2, 1, &[(0, 0, 0), (255, 255, 255)]).unwrap();
/// let art = render(&img, &RenderConfig::default()).unwrap();
/// assert_eq!(art.to_string(), "@ ");
/// ```
pub fn render(resized: &ImageBuffer, config: &RenderConfig) -> Result<AsciiArt, CoreError> {
    resized.validate()?;
    if config.ramp.is_empty() {
        return Err(CoreError::EmptyRamp);
    }

    let lut = LuminanceLut::new(&config.ramp);
    let layer = config.color_layer();
    log::debug!(
        "render {}×{} (rampe {} glyphes, couleur {:?})",
        resized.width,
        resized.height,
        config.ramp.len(),
        layer
    );

    let row_bytes = resized.width as usize * 3;
    let lines: Vec<String> = resized
        .data
        .par_chunks_exact(row_bytes)
        .map(|row| render_row(row, &lut, config.invert, layer))
        .collect();

    Ok(AsciiArt::new(lines))
}

/// Render one row of RGB bytes.
fn render_row(row: &[u8], lut: &LuminanceLut, invert: bool, layer: Option<ColorLayer>) -> String {
    let cells = row.len() / 3;
    let mut line = String::with_capacity(match layer {
        Some(_) => cells * COLORED_CELL_BYTES,
        None => cells,
    });

    for px in row.chunks_exact(3) {
        let rgb = (px[0], px[1], px[2]);
        let (ch, _) = map_pixel(rgb, lut, invert);
        match layer {
            Some(layer) => write_colored_glyph(&mut line, layer, rgb, ch),
            None => line.push(ch),
        }
    }
    line
}
