use std::fmt::Write;

/// Reset de tous les attributs SGR.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Which layer a truecolor escape paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorLayer {
    /// `ESC[38;2;R;G;Bm`
    Foreground,
    /// `ESC[48;2;R;G;Bm`
    Background,
}

impl ColorLayer {
    fn sgr(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// Séquence truecolor foreground.
///
/// # Example
/// ```
/// use ia_core::color::ansi_fg;
/// assert_eq!(ansi_fg(255, 0, 0), "\x1b[38;2;255;0;0m");
/// ```
#[must_use]
pub fn ansi_fg(r: u8, g: u8, b: u8) -> String {
    let mut out = String::with_capacity(19);
    write_escape(&mut out, ColorLayer::Foreground, (r, g, b));
    out
}

/// Séquence truecolor background.
///
/// # Example
/// ```
/// use ia_core::color::ansi_bg;
/// assert_eq!(ansi_bg(0, 128, 7), "\x1b[48;2;0;128;7m");
/// ```
#[must_use]
pub fn ansi_bg(r: u8, g: u8, b: u8) -> String {
    let mut out = String::with_capacity(19);
    write_escape(&mut out, ColorLayer::Background, (r, g, b));
    out
}

/// Append a truecolor escape to `out` without an intermediate allocation.
///
/// Channels are written in decimal with no padding.
#[inline]
pub fn write_escape(out: &mut String, layer: ColorLayer, (r, g, b): (u8, u8, u8)) {
    // fmt::Write for String never fails
    let _ = write!(out, "\x1b[{};2;{r};{g};{b}m", layer.sgr());
}

/// Append `escape + glyph + reset` for one cell.
///
/// # Example
/// ```
/// use ia_core::color::{write_colored_glyph, ColorLayer};
/// let mut s = String::new();
/// write_colored_glyph(&mut s, ColorLayer::Foreground, (255, 0, 0), '@');
/// assert_eq!(s, "\x1b[38;2;255;0;0m@\x1b[0m");
/// ```
#[inline]
pub fn write_colored_glyph(out: &mut String, layer: ColorLayer, rgb: (u8, u8, u8), ch: char) {
    write_escape(out, layer, rgb);
    out.push(ch);
    out.push_str(ANSI_RESET);
}
