use thiserror::Error;

/// Errors originating from the core module.
///
/// Every variant except `Config` belongs to the invalid-input family and is
/// raised at pipeline entry, before any pixel is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Image with zero width or zero height.
    #[error("Entrée invalide : dimensions {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Target character width of zero.
    #[error("Entrée invalide : la largeur cible doit être positive")]
    InvalidWidth,

    /// Character ramp without a single glyph.
    #[error("Entrée invalide : rampe de caractères vide")]
    EmptyRamp,

    /// Pixel buffer whose length does not match `width × height × 3`.
    #[error("Entrée invalide : buffer de {actual} octets, {expected} attendus")]
    BufferSize {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}

impl CoreError {
    /// True for the errors that reject the pipeline's input itself.
    ///
    /// # Example
    /// ```
    /// use ia_core::CoreError;
    /// assert!(CoreError::EmptyRamp.is_invalid_input());
    /// assert!(!CoreError::Config("x".into()).is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
