use anyhow::{Context, Result};
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use ia_core::config::ResizeFilter;
use ia_core::error::CoreError;
use ia_core::frame::ImageBuffer;

/// Hauteur/largeur d'une cellule de police monospace, calibrée à l'œil.
///
/// Terminal glyphs are roughly twice as tall as wide; scaling the row count
/// by this factor keeps the art's proportions close to the source.
pub const ASPECT_CORRECTION: f64 = 0.55;

/// Row count for a `target_width`-column rendering of a `width × height` image.
///
/// `max(1, round(height / width × target_width × ASPECT_CORRECTION))`.
///
/// # Example
/// ```
/// use ia_source::resize::target_height;
/// assert_eq!(target_height(200, 100, 100), 28);
/// assert_eq!(target_height(2, 2, 2), 1);
/// assert_eq!(target_height(1000, 1, 10), 1);
/// ```
#[must_use]
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    let rows = f64::from(height) / f64::from(width) * f64::from(target_width) * ASPECT_CORRECTION;
    (rows.round() as u32).max(1)
}

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::Nearest => ResizeAlg::Nearest,
    }
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// # Example
/// ```
/// use ia_core::config::ResizeFilter;
/// use ia_source::resize::Resizer;
/// let r = Resizer::new(ResizeFilter::Lanczos3);
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new resizer using `filter`.
    #[must_use]
    pub fn new(filter: ResizeFilter) -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(resize_alg(filter)),
        }
    }

    /// Resize `src` to exactly `width × height`, returning a new buffer.
    ///
    /// # Errors
    /// Returns an invalid-input error for an empty or malformed source or a
    /// zero target dimension, or an error if the resize itself fails.
    ///
    /// # Example
    /// ```
    /// use ia_core::config::ResizeFilter;
    /// use ia_core::frame::ImageBuffer;
    /// use ia_source::resize::Resizer;
    /// let mut r = Resizer::new(ResizeFilter::Bilinear);
    /// let dst = r.resize(&ImageBuffer::new(100, 100), 50, 20).unwrap();
    /// assert_eq!((dst.width, dst.height), (50, 20));
    /// ```
    pub fn resize(&mut self, src: &ImageBuffer, width: u32, height: u32) -> Result<ImageBuffer> {
        src.validate()?;
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height }.into());
        }
        if src.width == width && src.height == height {
            return Ok(src.clone());
        }

        let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x3)
            .context("Invalid source dimensions")?;
        let mut dst_image = Image::new(width, height, PixelType::U8x3);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(ImageBuffer::from_raw(width, height, dst_image.into_vec())?)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeFilter::default())
    }
}

/// Resample `image` to `target_width` columns with the reference Lanczos3
/// filter; the row count follows [`target_height`].
///
/// # Errors
/// Returns `CoreError::InvalidWidth` for a zero width and
/// `CoreError::InvalidDimensions` for a zero-area image.
///
/// # Example
/// ```
/// use ia_core::frame::ImageBuffer;
/// use ia_source::resize::resample;
/// let dst = resample(&ImageBuffer::new(100, 100), 50).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 28));
/// ```
pub fn resample(image: &ImageBuffer, target_width: u32) -> Result<ImageBuffer> {
    resample_with(image, target_width, ResizeFilter::Lanczos3)
}

/// [`resample`] with an explicit filter.
///
/// # Errors
/// Same as [`resample`].
pub fn resample_with(
    image: &ImageBuffer,
    target_width: u32,
    filter: ResizeFilter,
) -> Result<ImageBuffer> {
    if target_width == 0 {
        return Err(CoreError::InvalidWidth.into());
    }
    image.validate()?;

    let height = target_height(image.width, image.height, target_width);
    log::debug!(
        "resample {}×{} → {}×{} ({:?})",
        image.width,
        image.height,
        target_width,
        height,
        filter
    );
    Resizer::new(filter).resize(image, target_width, height)
}
