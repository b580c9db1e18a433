use std::path::Path;

use anyhow::Result;
use clap::Parser;
use ia_core::CoreError;
use ia_core::config::RenderConfig;

pub mod cli;
pub mod output;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    run(&cli).inspect_err(|err| {
        if err
            .downcast_ref::<CoreError>()
            .is_some_and(CoreError::is_invalid_input)
        {
            log::error!("Entrée rejetée, aucun rendu produit : {err}");
        }
    })
}

/// Config → décodage → pipeline → sortie.
fn run(cli: &cli::Cli) -> Result<()> {
    // Defaults < --config < flags
    let config = cli.apply(resolve_config(cli.config.as_deref())?)?;
    log::debug!("{config:?}");

    let image = ia_source::image::load_image(&cli.image)?;
    let art = pipeline::image_to_ascii(&image, &config)?;

    let colored = config.color_layer().is_some();
    output::emit(&art, cli.output.as_deref(), colored, &mut std::io::stdout())
}

/// Load `--config` when given, defaults otherwise.
fn resolve_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            log::info!("Chargement de la config {}", path.display());
            ia_core::config::load_config(path)
        }
        None => Ok(RenderConfig::default()),
    }
}
