use anyhow::Result;
use ia_core::config::RenderConfig;
use ia_core::frame::{AsciiArt, ImageBuffer};

/// Full conversion: resample to the configured width, then render.
///
/// Inputs are validated up front; on error nothing is rendered.
///
/// # Errors
/// Returns an invalid-input error (`ia_core::CoreError`) for a zero-area
/// image, zero width or empty ramp, or a resize failure.
pub fn image_to_ascii(image: &ImageBuffer, config: &RenderConfig) -> Result<AsciiArt> {
    config.validate()?;
    image.validate()?;

    let resized =
        ia_source::resize::resample_with(image, config.target_width, config.resize_filter)?;
    let art = ia_ascii::render::render(&resized, config)?;
    log::debug!("{} lignes rendues", art.height());
    Ok(art)
}
