//! Flight brief CLI application
//!
//! Command-line interface for rendering SimBrief flight plans into carrier
//! flight briefs.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use flightbrief_core::ConfigBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { config, no_color, command } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_path(config)
        .load()
        .context("Failed to load configuration")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(config, renderer);

    info!("Flight brief started");

    match command {
        Render(args) => cli.render(args)?,
        Fuel(args) => cli.fuel(&args)?,
        Carriers => cli.carriers()?,
        Schema => cli.schema()?,
    }

    info!("Flight brief finished");
    Ok(())
}
