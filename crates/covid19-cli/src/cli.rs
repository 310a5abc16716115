//! CLI argument definitions for `covid-tidy`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use covid19_ingest::Source;

#[derive(Parser)]
#[command(
    name = "covid-tidy",
    version,
    about = "Retrieve NYT COVID-19 time series as covid19R tidy data",
    long_about = "Retrieve the New York Times COVID-19 case/death time series\n\
                  (state- and county-level) and reshape them into the covid19R\n\
                  long format: one record per date, location, and metric."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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

#[derive(Subcommand)]
pub enum Command {
    /// Fetch (or read) a source and write it as tidy CSV.
    Refresh(RefreshArgs),

    /// List the available data sets.
    Info(InfoArgs),
}

#[derive(Parser)]
pub struct RefreshArgs {
    /// Which data set to refresh.
    #[arg(value_enum, value_name = "SOURCE")]
    pub source: SourceArg,

    /// Read the source CSV from a local file instead of fetching the
    /// published URL.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write tidy CSV to a file (default: stdout).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Emit the data-set registry as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI names for the supported sources.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    States,
    Counties,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::States => Source::NytStates,
            SourceArg::Counties => Source::NytCounties,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
