//! CLI command definitions using clap

use crate::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tokinc: increment letter-prefixed numeric tokens (A009 -> A010)
#[derive(Parser, Debug)]
#[command(name = "tokinc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never); overrides the config file
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "TOKINC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the next token for each input ("Error" for invalid inputs)
    Next(NextArgs),

    /// Print successive tokens after a starting token
    Seq(SeqArgs),

    /// Exit 0 if the input is a valid token, 1 otherwise
    Check(CheckArgs),

    /// Increment every line of a file or stdin
    Batch(BatchArgs),

    /// Show the effective configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the next command
#[derive(Parser, Debug)]
pub struct NextArgs {
    /// Inputs to increment
    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Parse each input as a JSON value (e.g. '"A1"', 'null', '42')
    #[arg(long)]
    pub json_input: bool,

    /// Exit with an error if any input is rejected
    #[arg(long)]
    pub strict: bool,

    /// Output format (defaults to the config file's format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the seq command
#[derive(Parser, Debug)]
pub struct SeqArgs {
    /// Starting token (not included in the output)
    pub token: String,

    /// Number of tokens to print
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Output format (defaults to the config file's format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Input to validate
    #[arg(allow_hyphen_values = true)]
    pub input: String,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input file, one input per line ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Parse each line as a JSON value
    #[arg(long)]
    pub json_input: bool,

    /// Exit with an error if any line is rejected
    #[arg(long)]
    pub strict: bool,

    /// Output format (defaults to the config file's format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
