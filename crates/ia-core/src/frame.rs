use std::fmt;

use crate::error::CoreError;

/// Un pixel RGB, un octet par canal.
pub type Rgb = (u8, u8, u8);

/// Buffer de pixels RGB décodé.
///
/// Stocke les pixels en RGB row-major, 3 bytes par pixel. Chaque étape du
/// pipeline le lit en lecture seule ou en produit un nouveau.
///
/// # Example
/// ```
/// use ia_core::frame::ImageBuffer;
/// let img = ImageBuffer::new(10, 10);
/// assert_eq!(img.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageBuffer {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ia_core::frame::ImageBuffer;
    /// let img = ImageBuffer::new(100, 50);
    /// assert_eq!(img.width, 100);
    /// assert_eq!(img.height, 50);
    /// assert_eq!(img.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap raw RGB bytes, checking the length against the dimensions.
    ///
    /// # Errors
    /// Returns `CoreError::BufferSize` if `data.len() != width × height × 3`.
    ///
    /// # Example
    /// ```
    /// use ia_core::frame::ImageBuffer;
    /// let img = ImageBuffer::from_raw(1, 1, vec![1, 2, 3]).unwrap();
    /// assert_eq!(img.pixel(0, 0), (1, 2, 3));
    /// assert!(ImageBuffer::from_raw(2, 1, vec![0; 3]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a buffer from row-major pixel triples.
    ///
    /// # Errors
    /// Returns `CoreError::BufferSize` if the pixel count does not match.
    ///
    /// # Example
    /// ```
    /// use ia_core::frame::ImageBuffer;
    /// let img = ImageBuffer::from_pixels(2, 1, &[(0, 0, 0), (255, 255, 255)]).unwrap();
    /// assert_eq!(img.pixel(1, 0), (255, 255, 255));
    /// ```
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, CoreError> {
        let data = pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect();
        Self::from_raw(width, height, data)
    }

    /// Check the invariants the pipeline relies on: non-zero area and a
    /// byte length of exactly `width × height × 3`.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` for a zero-area image, `BufferSize` for a
    /// truncated or oversized buffer.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * 3;
        if self.data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Accès au pixel (x, y) → (r, g, b).
    ///
    /// # Example
    /// ```
    /// use ia_core::frame::ImageBuffer;
    /// let img = ImageBuffer::new(10, 10);
    /// assert_eq!(img.pixel(0, 0), (0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        if idx + 2 >= self.data.len() {
            return (0, 0, 0);
        }
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}

/// Résultat du rendu : une ligne par rangée de caractères.
///
/// `Display` joins the lines with a single `\n` and no trailing newline.
///
/// # Example
/// ```
/// use ia_core::frame::AsciiArt;
/// let art = AsciiArt::new(vec!["@.".into(), ".@".into()]);
/// assert_eq!(art.to_string(), "@.\n.@");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Rendered rows, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_zero_area() {
        let img = ImageBuffer::new(0, 5);
        assert_eq!(
            img.validate(),
            Err(CoreError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(ImageBuffer::new(5, 0).validate().is_err());
    }

    #[test]
    fn validate_rejects_truncated_buffer() {
        let mut img = ImageBuffer::new(2, 2);
        img.data.pop();
        assert_eq!(
            img.validate(),
            Err(CoreError::BufferSize {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn pixels_are_row_major() {
        let img = ImageBuffer::from_pixels(2, 2, &[(1, 1, 1), (2, 2, 2), (3, 3, 3), (4, 4, 4)])
            .unwrap();
        assert_eq!(&img.data[6..], &[3, 3, 3, 4, 4, 4]);
        assert_eq!(img.pixel(0, 1), (3, 3, 3));
        assert_eq!(img.pixel(1, 0), (2, 2, 2));
    }

    #[test]
    fn display_single_line_has_no_newline() {
        let art = AsciiArt::new(vec!["@%#".into()]);
        assert_eq!(art.to_string(), "@%#");
        assert_eq!(art.height(), 1);
    }
}
