use ia_core::charset::{CharacterRamp, LuminanceLut};
use ia_core::frame::Rgb;

/// Luma ITU-R BT.601, point fixe 16.16.
///
/// `(19595·R + 38470·G + 7471·B + 0x8000) >> 16`. The weights sum to 65536,
/// so white maps to exactly 255 and the result never leaves [0, 255].
///
/// # Example
/// ```
/// use ia_ascii::luminance::luminance;
/// assert_eq!(luminance((0, 0, 0)), 0);
/// assert_eq!(luminance((255, 255, 255)), 255);
/// assert_eq!(luminance((255, 0, 0)), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn luminance((r, g, b): Rgb) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Map one pixel to its ramp glyph.
///
/// Returns the glyph and the luminance after optional inversion.
///
/// # Example
/// ```
/// use ia_ascii::luminance::map_to_char;
/// use ia_core::charset::CharacterRamp;
/// let ramp = CharacterRamp::default();
/// assert_eq!(map_to_char((0, 0, 0), &ramp, false), ('@', 0));
/// assert_eq!(map_to_char((0, 0, 0), &ramp, true), (' ', 255));
/// ```
#[inline]
#[must_use]
pub fn map_to_char(pixel: Rgb, ramp: &CharacterRamp, invert: bool) -> (char, u8) {
    map_luminance(luminance(pixel), ramp, invert)
}

/// Same as [`map_to_char`] for an already computed luminance.
#[inline]
#[must_use]
pub fn map_luminance(luminance: u8, ramp: &CharacterRamp, invert: bool) -> (char, u8) {
    let lum = if invert { 255 - luminance } else { luminance };
    (ramp.glyph_for(lum), lum)
}

/// LUT-backed variant used by the renderer's inner loop.
#[inline(always)]
#[must_use]
pub fn map_pixel(pixel: Rgb, lut: &LuminanceLut, invert: bool) -> (char, u8) {
    let mut lum = luminance(pixel);
    if invert {
        lum = 255 - lum;
    }
    (lut.map(lum), lum)
}

#[cfg(test)]
mod tests {
    use ia_core::charset::RampPreset;

    use super::*;

    #[test]
    fn gray_pixels_keep_their_level() {
        for v in 0..=255u8 {
            assert_eq!(luminance((v, v, v)), v);
        }
    }

    #[test]
    fn green_weighs_most() {
        assert!(luminance((0, 255, 0)) > luminance((255, 0, 0)));
        assert!(luminance((255, 0, 0)) > luminance((0, 0, 255)));
    }

    #[test]
    fn invert_equals_complement() {
        for preset in [RampPreset::Default, RampPreset::Extended] {
            let ramp = preset.ramp();
            for l in 0..=255u8 {
                assert_eq!(
                    map_luminance(l, &ramp, true),
                    map_luminance(255 - l, &ramp, false),
                    "luminance {l}"
                );
            }
        }
    }

    #[test]
    fn mapping_monotonic() {
        let ramp = RampPreset::Extended.ramp();
        let mut prev = 0usize;
        for l in 0..=255u8 {
            let (ch, _) = map_luminance(l, &ramp, false);
            let idx = ramp.chars().iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev, "mapping non monotone à luminance {l}");
            prev = idx;
        }
    }

    #[test]
    fn extremes_hit_ramp_ends() {
        let ramp = CharacterRamp::new("ABCDE").unwrap();
        assert_eq!(map_luminance(0, &ramp, false).0, 'A');
        assert_eq!(map_luminance(255, &ramp, false).0, 'E');
        assert_eq!(map_to_char((255, 255, 255), &ramp, false), ('E', 255));
    }

    #[test]
    fn lut_path_matches_direct_path() {
        let ramp = RampPreset::Default.ramp();
        let lut = LuminanceLut::new(&ramp);
        for v in (0..=255u8).step_by(5) {
            let px = (v, 255 - v, v / 2);
            for invert in [false, true] {
                assert_eq!(map_pixel(px, &lut, invert), map_to_char(px, &ramp, invert));
            }
        }
    }
}
