//! CLI argument definitions for the delegate map.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "delegate-map",
    version,
    about = "Explore U.S. primary delegates on a clickable map",
    long_about = "Load region, Democratic and Republican primary tables together with the\n\
                  map geometry, then inspect regions, replay clicks or render the map as HTML."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub inputs: InputArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the reference tables, geometry and configuration come from.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Directory holding us-state-names.tsv, dem.csv and gop.csv
    /// (default: $DELEGATE_MAP_DATA_DIR or the bundled data).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Map geometry JSON (default: <DATA_DIR>/us.json).
    #[arg(long = "topology", value_name = "PATH", global = true)]
    pub topology: Option<PathBuf>,

    /// TOML file overriding map settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Drop map features missing from the region table instead of failing.
    #[arg(long = "skip-unknown-regions", global = true)]
    pub skip_unknown_regions: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every region with its primary records.
    Regions,

    /// Show the detail panel for one region.
    Panel(PanelArgs),

    /// Replay a sequence of clicks and report the resulting view.
    Click(ClickArgs),

    /// Write the map as a standalone HTML page.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct PanelArgs {
    /// Region id, postal code or name.
    #[arg(value_name = "REGION")]
    pub region: String,

    /// Print HTML markup instead of text.
    #[arg(long = "html")]
    pub html: bool,
}

#[derive(Parser)]
pub struct ClickArgs {
    /// Click targets in order: a region id, code or name, or "background".
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    /// Milliseconds between clicks.
    #[arg(long = "interval-ms", default_value_t = 1000)]
    pub interval_ms: u64,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Output HTML file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Regions to click before rendering, in order.
    #[arg(long = "select", value_name = "REGION")]
    pub select: Vec<String>,

    /// Render the view this many milliseconds after the last click
    /// (default: once the transition has settled).
    #[arg(long = "at-ms")]
    pub at_ms: Option<u64>,

    /// Page title.
    #[arg(long = "title", default_value = "U.S. primary delegates")]
    pub title: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
