//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::ConfigArgs;

/// Execute the config command
pub fn execute_config(config: &CliConfig, reporter: &Reporter, args: &ConfigArgs) -> CliResult<()> {
    let shown = if args.defaults {
        CliConfig::default()
    } else {
        config.clone()
    };
    reporter.result(shown.to_yaml()?.trim_end())?;
    Ok(())
}
