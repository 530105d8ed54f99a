//! `tracing` subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured filter or the
//! verbosity default applies. Logs go to stderr.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for `config`, honouring `RUST_LOG`
pub fn resolve_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    parse_filter(config.log_directive())
}

/// Parses a filter directive
pub fn parse_filter(directive: &str) -> CliResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| CliError::config(format!("invalid log filter {directive:?}: {e}")))
}

/// Installs the global subscriber
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    let filter = resolve_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.color.should_color_stderr())
        .try_init()
        .map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}
