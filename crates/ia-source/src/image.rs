use std::path::Path;

use anyhow::{Context, Result};
use ia_core::frame::ImageBuffer;
use image::DynamicImage;

/// Flatten any decoded image to 8-bit RGB. Alpha is dropped, not composited.
///
/// # Example
/// ```
/// use ia_source::image::from_dynamic;
/// let img = image::DynamicImage::new_rgba8(4, 3);
/// let buf = from_dynamic(&img);
/// assert_eq!((buf.width, buf.height, buf.data.len()), (4, 3, 36));
/// ```
#[must_use]
pub fn from_dynamic(img: &DynamicImage) -> ImageBuffer {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    ImageBuffer {
        data: rgb.into_raw(),
        width,
        height,
    }
}

/// Charge une image depuis le disque (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use ia_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("test.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let buf = from_dynamic(&img);
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        buf.width,
        buf.height
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn png_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let buf = load_image(&path).unwrap();
        assert_eq!((buf.width, buf.height), (3, 2));
        assert_eq!(buf.pixel(2, 1), (10, 20, 30));
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 0])));
        let buf = from_dynamic(&img);
        assert_eq!(buf.pixel(0, 0), (200, 100, 50));
        assert_eq!(buf.data.len(), 3);
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(err.to_string().contains("garbage.png"));
    }

    #[test]
    fn missing_file_error_names_path() {
        let err = load_image(Path::new("/nonexistent/cat.png")).unwrap_err();
        assert!(err.to_string().contains("cat.png"));
    }
}
