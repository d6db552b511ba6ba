use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Chart type rendered by the `render` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Vertical bars, one per data point
    Bar,
    /// Single-series line
    Line,
    /// Pie or donut (with --hole-size)
    Pie,
    /// Multi-series area over shared categories
    Area,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as written in config files
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "beaned-charts")]
#[command(author, version, about = "Render bar, line, pie and area charts as standalone SVG")]
#[command(long_about = "Render bar, line, pie/donut and multi-series area charts from JSON data \
    into self-contained SVG documents.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid chart data\n  \
    2 - Configuration or I/O error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart from a JSON data file
    Render(RenderArgs),

    /// Render the bundled sample charts
    Demo(DemoArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart type
    #[arg(value_enum)]
    pub kind: ChartKind,

    /// JSON data file, or `-` for stdin
    #[arg(short, long)]
    pub data: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the SVG to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document width (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Document height (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Smooth curves (line and area charts)
    #[arg(long)]
    pub smooth: bool,

    /// Fill under the line with a gradient (line and area charts)
    #[arg(long)]
    pub fill: bool,

    /// Donut hole as a fraction of the radius (pie charts)
    #[arg(long)]
    pub hole_size: Option<f64>,

    /// Offset slices from the centre (pie charts)
    #[arg(long)]
    pub explode: bool,

    /// Record field holding the category label (area charts)
    #[arg(long, default_value = "date")]
    pub x_key: String,

    /// Accessible document title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Write one SVG per chart into this directory instead of printing them
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".beaned-charts.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".beaned-charts.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
