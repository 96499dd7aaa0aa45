use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Render SimBrief flight plans into carrier flight briefs
///
/// Reads a SimBrief OFP (JSON) and lays it out as the carrier's paper brief:
/// acceptance form, cover page, EFB effectivity and the full flight plan with
/// navigation log. Output is rich terminal text, plain text or the document
/// tree as JSON for other renderers.
#[derive(Parser)]
#[command(version, about, name = "fbrief")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/flightbrief/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the flight brief CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a flight brief from an OFP
    #[command(alias = "r")]
    Render(RenderArgs),
    /// Show the fuel summary derived from an OFP
    #[command(alias = "f")]
    Fuel(FuelArgs),
    /// List supported carriers
    Carriers,
    /// Print the JSON Schema of the rendered document
    Schema,
}

/// Render a flight brief
#[derive(ClapArgs)]
pub struct RenderArgs {
    /// OFP JSON file, or `-` to read from stdin
    pub file: PathBuf,
    /// Carrier code. Defaults to the configured default carrier
    #[arg(short, long)]
    pub carrier: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the brief to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Show the fuel summary
#[derive(ClapArgs)]
pub struct FuelArgs {
    /// OFP JSON file, or `-` to read from stdin
    pub file: PathBuf,
}

/// Output format for rendered briefs
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Page-by-page text laid out like the paper form
    Text,
    /// The document tree as pretty-printed JSON
    Json,
}
