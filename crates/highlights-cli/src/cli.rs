//! CLI argument definitions for the book highlights viewer.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use highlights_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "highlights",
    version,
    about = "Book Highlights - view a spreadsheet of books and highlights",
    long_about = "Fetch a publicly readable spreadsheet as CSV and show its books \
                  and highlights.\n\n\
                  Sheets are fetched concurrently; a sheet that fails to load is \
                  reported in place without hiding the others."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (default: platform config dir/highlights.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Spreadsheet id to read instead of the configured one.
    #[arg(long = "spreadsheet", value_name = "ID", global = true)]
    pub spreadsheet: Option<String>,

    /// Read local CSV exports instead of fetching (repeatable).
    ///
    /// The sheet name is the file stem; its role is inferred from the name.
    #[arg(long = "csv", value_name = "FILE", global = true)]
    pub csv: Vec<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

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

#[derive(Subcommand, Clone)]
pub enum Command {
    /// One row per highlight with its book (default).
    List,

    /// Every fetched sheet as a raw table.
    Sheets,

    /// Book catalog as cards.
    Books,

    /// Detail panel for one book and its highlights.
    Book {
        /// Exact book id.
        #[arg(value_name = "BOOK_ID")]
        book_id: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Logging setup from flags.
    ///
    /// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
        }
    }
}
