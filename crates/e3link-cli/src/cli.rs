//! CLI argument definitions for the link generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "e3link",
    version,
    about = "E3 World dynamic link generator - Map serial codes to tag URLs",
    long_about = "Read serial codes from a delimited file (first column), validate them,\n\
                  and write a CSV mapping each code to its generated dynamic link.\n\
                  Delimiter and header row are detected automatically."
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

#[derive(Subcommand)]
pub enum Command {
    /// Generate dynamic links from a serial code file.
    Generate(GenerateArgs),

    /// Show how an input file would be parsed, without generating anything.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Input file with serial codes in the first column
    /// (default: first CSV file in the working directory).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV path (default: dynamic_links_<timestamp>.csv).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// URL template with a {code} placeholder.
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Field delimiter (skips auto-detection).
    #[arg(long = "delimiter", value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// Validate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a header-only output file when no codes validate.
    ///
    /// By default an all-invalid batch produces no output file and the run is
    /// reported as failed. This flag opts into the lenient behavior instead.
    #[arg(long = "write-empty")]
    pub write_empty: bool,

    /// Also write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Input file to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// How many leading codes to preview.
    #[arg(long = "limit", value_name = "N", default_value_t = 5)]
    pub limit: usize,

    /// Field delimiter (skips auto-detection).
    #[arg(long = "delimiter", value_enum)]
    pub delimiter: Option<DelimiterArg>,
}

/// CLI delimiter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl DelimiterArg {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
            Self::Semicolon => b';',
            Self::Pipe => b'|',
        }
    }
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
