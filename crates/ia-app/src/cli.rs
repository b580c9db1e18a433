use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ia_core::charset::{CharacterRamp, RampPreset};
use ia_core::config::{RenderConfig, ResizeFilter};

/// img2ascii — Image → ASCII art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Largeur de sortie en caractères. Défaut : 100.
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Écrire l'art dans un fichier au lieu de l'afficher.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Densité de la rampe de caractères.
    #[arg(short, long, value_enum)]
    pub ramp: Option<RampArg>,

    /// Rampe personnalisée, du plus dense au plus clair (prioritaire sur --ramp).
    #[arg(long)]
    pub custom_ramp: Option<String>,

    /// Inverser la luminance.
    #[arg(short, long, default_value_t = false)]
    pub invert: bool,

    /// Couleur truecolor ANSI (foreground par défaut).
    #[arg(short, long, default_value_t = false)]
    pub color: bool,

    /// Forcer le rendu sans couleur, même avec --color.
    #[arg(short, long, alias = "grayscale_only", default_value_t = false)]
    pub grayscale_only: bool,

    /// Colorer le fond plutôt que le caractère.
    #[arg(short, long, default_value_t = false)]
    pub background: bool,

    /// Filtre de rééchantillonnage.
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Fichier de configuration TOML (section [render]).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// `--ramp` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RampArg {
    Default,
    Extended,
}

impl From<RampArg> for RampPreset {
    fn from(arg: RampArg) -> Self {
        match arg {
            RampArg::Default => RampPreset::Default,
            RampArg::Extended => RampPreset::Extended,
        }
    }
}

/// `--filter` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Lanczos3,
    CatmullRom,
    Bilinear,
    Nearest,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Bilinear => ResizeFilter::Bilinear,
            FilterArg::Nearest => ResizeFilter::Nearest,
        }
    }
}

impl Cli {
    /// Apply CLI overrides on top of `config` (defaults or file values).
    ///
    /// Flags only ever switch a feature on; absent options keep `config`'s
    /// value.
    ///
    /// # Errors
    /// Returns an error if the custom ramp is empty or the result fails
    /// validation (zero width).
    pub fn apply(&self, mut config: RenderConfig) -> anyhow::Result<RenderConfig> {
        if let Some(width) = self.width {
            config.target_width = width;
        }
        if let Some(ref custom) = self.custom_ramp {
            if self.ramp.is_some() {
                log::warn!("--custom-ramp fourni : --ramp est ignoré.");
            }
            config.ramp = CharacterRamp::new(custom).context("--custom-ramp")?;
        } else if let Some(ramp) = self.ramp {
            config.ramp = RampPreset::from(ramp).ramp();
        }
        if let Some(filter) = self.filter {
            config.resize_filter = filter.into();
        }
        config.invert |= self.invert;
        config.color_enabled |= self.color;
        config.background_mode |= self.background;
        config.grayscale_only |= self.grayscale_only;

        config.validate()?;
        Ok(config)
    }
}
