//! Command handlers.
//!
//! Each handler reads its input, calls into `flightbrief-core`, and writes
//! the result to stdout (or the requested file). Core errors are wrapped
//! with `anyhow` context naming what the command was doing.

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};

use anyhow::{Context, Result};
use flightbrief_core::{
    document::json_schema, generate, BriefConfig, Carrier, FuelSummary, FuelTable, RawFlightPlan,
};
use log::{debug, info};

use crate::{
    args::{FuelArgs, OutputFormat, RenderArgs},
    renderer::TerminalRenderer,
};

/// Input path that reads the OFP from stdin.
const STDIN_PATH: &str = "-";

pub struct Cli {
    config: BriefConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: BriefConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn render(&self, args: RenderArgs) -> Result<()> {
        let plan = read_plan(&args.file)?;
        let carrier = match args.carrier {
            Some(code) => code.parse::<Carrier>()?,
            None => self
                .config
                .default_carrier()
                .context("Invalid default carrier in configuration")?,
        };

        let document = generate(&plan, carrier, &self.config)
            .with_context(|| format!("Failed to generate {carrier} brief"))?;
        info!("Generated {} page brief", document.pages.len());

        match args.output {
            Some(path) => {
                let mut file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                // Files never get terminal styling
                match args.format {
                    OutputFormat::Json => serde_json::to_writer_pretty(&mut file, &document)?,
                    OutputFormat::Text => {
                        TerminalRenderer::new(false).render_document(&mut file, &document)?;
                    }
                }
                file.flush()?;
                info!("Wrote brief to {}", path.display());
            }
            None => {
                let mut out = io::stdout().lock();
                match args.format {
                    OutputFormat::Json => {
                        serde_json::to_writer_pretty(&mut out, &document)?;
                        writeln!(out)?;
                    }
                    OutputFormat::Text => self.renderer.render_document(&mut out, &document)?,
                }
            }
        }
        Ok(())
    }

    pub fn fuel(&self, args: &FuelArgs) -> Result<()> {
        let plan = read_plan(&args.file)?;
        let summary = FuelSummary::from_plan(&plan).context("Failed to compute fuel summary")?;
        self.renderer
            .render_text(&mut io::stdout().lock(), FuelTable(&summary).to_string().trim_end())
    }

    pub fn carriers(&self) -> Result<()> {
        let default = self.config.default_carrier().ok();
        let mut out = io::stdout().lock();
        for carrier in Carrier::all() {
            let marker = if default == Some(*carrier) { " (default)" } else { "" };
            writeln!(out, "{}  {}{marker}", carrier.code(), carrier.name())?;
        }
        Ok(())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = serde_json::to_string_pretty(&json_schema())?;
        writeln!(io::stdout().lock(), "{schema}")?;
        Ok(())
    }
}

/// Reads an OFP from `path`, or from stdin when `path` is `-`.
fn read_plan(path: &Path) -> Result<RawFlightPlan> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading OFP from stdin");
        return RawFlightPlan::from_reader(io::stdin().lock())
            .context("Failed to parse flight plan from stdin");
    }

    debug!("Reading OFP from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    RawFlightPlan::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse flight plan {}", path.display()))
}
