use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CharacterRamp, RampPreset};
use crate::color::ColorLayer;
use crate::error::CoreError;

/// Largeur de sortie par défaut, en caractères.
pub const DEFAULT_WIDTH: u32 = 100;

/// Configuration complète du rendu.
///
/// Construite une fois par invocation puis passée par référence ; jamais
/// modifiée pendant le pipeline.
///
/// # Example
/// ```
/// use ia_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.target_width, 100);
/// assert!(config.validate().is_ok());
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Largeur cible en caractères (> 0).
    pub target_width: u32,
    /// Rampe de caractères, du plus dense au plus clair.
    pub ramp: CharacterRamp,
    /// Inverser la luminance (pour fond clair).
    pub invert: bool,
    /// Activer la couleur truecolor.
    pub color_enabled: bool,
    /// Colorer le fond plutôt que le caractère.
    pub background_mode: bool,
    /// Forcer le rendu sans couleur, même si `color_enabled`.
    pub grayscale_only: bool,
    /// Filtre de rééchantillonnage.
    pub resize_filter: ResizeFilter,
}

/// Resampling filter used to shrink the source image to the character grid.
///
/// # Example
/// ```
/// use ia_core::config::ResizeFilter;
/// assert_eq!(ResizeFilter::default(), ResizeFilter::Lanczos3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    /// Lanczos windowed sinc, 3 lobes. Reference quality.
    #[default]
    Lanczos3,
    /// Catmull-Rom cubic.
    CatmullRom,
    /// Bilinear. Softer, faster.
    Bilinear,
    /// Nearest neighbour. Aliases on fine detail.
    Nearest,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_WIDTH,
            ramp: CharacterRamp::default(),
            invert: false,
            color_enabled: false,
            background_mode: false,
            grayscale_only: false,
            resize_filter: ResizeFilter::Lanczos3,
        }
    }
}

impl RenderConfig {
    /// Check the values the pipeline cannot work with.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidWidth` for a zero width and
    /// `CoreError::EmptyRamp` for an empty ramp.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_width == 0 {
            return Err(CoreError::InvalidWidth);
        }
        if self.ramp.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(())
    }

    /// Layer to paint, or `None` when the output is plain text.
    ///
    /// `grayscale_only` wins over every other color flag.
    ///
    /// # Example
    /// ```
    /// use ia_core::color::ColorLayer;
    /// use ia_core::config::RenderConfig;
    /// let mut config = RenderConfig::default();
    /// config.color_enabled = true;
    /// assert_eq!(config.color_layer(), Some(ColorLayer::Foreground));
    /// config.background_mode = true;
    /// assert_eq!(config.color_layer(), Some(ColorLayer::Background));
    /// config.grayscale_only = true;
    /// assert_eq!(config.color_layer(), None);
    /// ```
    #[must_use]
    pub fn color_layer(&self) -> Option<ColorLayer> {
        if !self.color_enabled || self.grayscale_only {
            None
        } else if self.background_mode {
            Some(ColorLayer::Background)
        } else {
            Some(ColorLayer::Foreground)
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    width: Option<u32>,
    ramp: Option<RampPreset>,
    custom_ramp: Option<String>,
    invert: Option<bool>,
    color: Option<bool>,
    background: Option<bool>,
    grayscale_only: Option<bool>,
    filter: Option<ResizeFilter>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns `CoreError::Config` if the TOML is malformed or names an unknown
/// preset or filter, and an invalid-input error if the resulting
/// configuration fails [`RenderConfig::validate`].
///
/// # Example
/// ```
/// use ia_core::config::parse_config;
/// let config = parse_config("[render]\nwidth = 40\nramp = \"extended\"").unwrap();
/// assert_eq!(config.target_width, 40);
/// assert_eq!(config.ramp.len(), 69);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;

    let mut config = RenderConfig::default();
    let Some(r) = file.render else {
        return Ok(config);
    };

    if let Some(v) = r.width {
        config.target_width = v;
    }
    if let Some(v) = r.ramp {
        config.ramp = v.ramp();
    }
    if let Some(v) = r.custom_ramp {
        if r.ramp.is_some() {
            log::warn!("custom_ramp défini : le preset `ramp` est ignoré.");
        }
        config.ramp = CharacterRamp::new(&v).context("custom_ramp")?;
    }
    if let Some(v) = r.invert {
        config.invert = v;
    }
    if let Some(v) = r.color {
        config.color_enabled = v;
    }
    if let Some(v) = r.background {
        config.background_mode = v;
    }
    if let Some(v) = r.grayscale_only {
        config.grayscale_only = v;
    }
    if let Some(v) = r.filter {
        config.resize_filter = v;
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ia_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))
}
