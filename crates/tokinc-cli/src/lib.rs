//! tokinc CLI Library
//!
//! Command-line interface for the token-increment engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    BatchArgs, CheckArgs, Cli, ColorArg, Commands, ConfigArgs, NextArgs, SeqArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_summary, render_report, render_report_json, OutputFormat, Reporter};
