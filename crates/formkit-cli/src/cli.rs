//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "formkit",
    version,
    about = "Lint, preview and fill dynamic form definitions",
    long_about = "Work with JSON form definitions outside a browser.\n\n\
                  Checks definitions for authoring mistakes, previews pagination,\n\
                  drives a filling session from a value file, and resolves themes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Allow respondent values in trace logs.
    #[arg(long = "log-values", global = true)]
    pub log_values: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the supported field types and their defaults.
    Types,

    /// Check a form definition for authoring problems.
    Lint(LintArgs),

    /// Show how a form's fields are split into pages.
    Pages(PagesArgs),

    /// Fill a form from a value file and submit it.
    Fill(FillArgs),

    /// Print the resolved theme of a form as JSON.
    Theme(FormArgs),
}

#[derive(Parser)]
pub struct FormArgs {
    /// Path to the form definition JSON file.
    #[arg(value_name = "FORM")]
    pub form: PathBuf,
}

#[derive(Parser)]
pub struct LintArgs {
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Report inverted numeric ranges and dangling conditions as errors.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct PagesArgs {
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Override the form's pagination setting.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Parser)]
pub struct FillArgs {
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// JSON object mapping field ids (and composite keys) to values.
    #[arg(long = "values", value_name = "VALUES")]
    pub values: PathBuf,

    /// Directory for submission files (default: <FORM dir>/submissions).
    #[arg(long = "out", value_name = "DIR")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Single,
    Multi,
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
