use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 10 caractères — compact, bon contraste (dense→clair).
pub const CHARSET_DEFAULT: &str = "@%#*+=-:. ";

/// 69 caractères — Paul Bourke extended (dense→clair).
pub const CHARSET_EXTENDED: &str =
    "$@B%8&WM#*oahkbdpqwmZ0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Built-in ramp selection.
///
/// # Example
/// ```
/// use ia_core::charset::RampPreset;
/// assert_eq!(RampPreset::default().charset(), "@%#*+=-:. ");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RampPreset {
    /// Short 10-glyph ramp.
    #[default]
    Default,
    /// Long 69-glyph ramp.
    Extended,
}

impl RampPreset {
    #[must_use]
    pub fn charset(self) -> &'static str {
        match self {
            Self::Default => CHARSET_DEFAULT,
            Self::Extended => CHARSET_EXTENDED,
        }
    }

    #[must_use]
    pub fn ramp(self) -> CharacterRamp {
        CharacterRamp::from_static(self.charset())
    }
}

/// Ordered glyphs from dense (dark) to sparse (light). Never empty.
///
/// # Example
/// ```
/// use ia_core::charset::CharacterRamp;
/// let ramp = CharacterRamp::new("@. ").unwrap();
/// assert_eq!(ramp.len(), 3);
/// assert_eq!(ramp.glyph_for(0), '@');
/// assert_eq!(ramp.glyph_for(255), ' ');
/// assert!(CharacterRamp::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from a string ordered densest→lightest.
    ///
    /// # Errors
    /// Returns `CoreError::EmptyRamp` if `ramp` has no characters.
    pub fn new(ramp: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    // Built-in charsets are non-empty constants.
    fn from_static(charset: &'static str) -> Self {
        Self {
            chars: charset.chars().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty ramps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Quantize a luminance to a ramp index.
    ///
    /// `floor(luminance / 255 × (len − 1))` in integer arithmetic: 0 maps to
    /// the densest glyph, 255 to the lightest, monotonic in between.
    ///
    /// # Example
    /// ```
    /// use ia_core::charset::CharacterRamp;
    /// let ramp = CharacterRamp::default();
    /// assert_eq!(ramp.index_for(0), 0);
    /// assert_eq!(ramp.index_for(128), 4);
    /// assert_eq!(ramp.index_for(255), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index_for(&self, luminance: u8) -> usize {
        let last = self.chars.len().saturating_sub(1);
        (usize::from(luminance) * last / 255).min(last)
    }

    /// Glyph for a luminance value.
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, luminance: u8) -> char {
        self.chars[self.index_for(luminance)]
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        RampPreset::Default.ramp()
    }
}

/// Lookup table mapping luminance [0..255] → character.
///
/// Pre-computed once per render for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use ia_core::charset::{CharacterRamp, LuminanceLut};
/// let lut = LuminanceLut::new(&CharacterRamp::new("@#:. ").unwrap());
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(255), ' ');
/// ```
pub struct LuminanceLut {
    lut: [char; 256],
}

impl LuminanceLut {
    #[must_use]
    pub fn new(ramp: &CharacterRamp) -> Self {
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = ramp.glyph_for(i as u8);
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use ia_core::charset::{CharacterRamp, LuminanceLut};
    /// let lut = LuminanceLut::new(&CharacterRamp::new("@#:. ").unwrap());
    /// assert_eq!(lut.map(128), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_documented_lengths() {
        assert_eq!(RampPreset::Default.ramp().len(), 10);
        assert_eq!(RampPreset::Extended.ramp().len(), 69);
    }

    #[test]
    fn presets_go_dense_to_sparse() {
        for preset in [RampPreset::Default, RampPreset::Extended] {
            let ramp = preset.ramp();
            assert_ne!(ramp.glyph_for(0), ' ');
            assert_eq!(ramp.glyph_for(255), ' ');
        }
    }

    #[test]
    fn index_monotonic_for_every_length() {
        for len in 1..=70usize {
            let charset: String = (0..len).map(|i| char::from(b'!' + i as u8)).collect();
            let ramp = CharacterRamp::new(&charset).unwrap();
            let mut prev = 0usize;
            for lum in 0..=255u8 {
                let idx = ramp.index_for(lum);
                assert!(idx >= prev, "index non monotone à luminance {lum} (len {len})");
                assert!(idx < len);
                prev = idx;
            }
            assert_eq!(ramp.index_for(0), 0);
            assert_eq!(ramp.index_for(255), len - 1);
        }
    }

    #[test]
    fn single_glyph_ramp_always_selects_it() {
        let ramp = CharacterRamp::new("#").unwrap();
        assert_eq!(ramp.glyph_for(0), '#');
        assert_eq!(ramp.glyph_for(255), '#');
    }

    #[test]
    fn multibyte_glyphs_count_as_one() {
        let ramp = CharacterRamp::new("█▓▒░ ").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.glyph_for(0), '█');
    }

    #[test]
    fn lut_agrees_with_ramp() {
        let ramp = RampPreset::Extended.ramp();
        let lut = LuminanceLut::new(&ramp);
        for lum in 0..=255u8 {
            assert_eq!(lut.map(lum), ramp.glyph_for(lum));
        }
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert_eq!(CharacterRamp::new(""), Err(CoreError::EmptyRamp));
    }
}
