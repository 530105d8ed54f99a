//! Next command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::NextArgs;
use token_increment::{BatchReport, InputMode};

/// Execute the next command
pub fn execute_next(config: &CliConfig, reporter: &Reporter, args: &NextArgs) -> CliResult<()> {
    let report = evaluate_inputs(&args.inputs, args.json_input);
    tracing::info!(
        inputs = report.len(),
        rejected = report.invalid(),
        "incremented command-line inputs"
    );
    super::emit_report(
        reporter,
        &report,
        args.format.unwrap_or(config.format),
        args.strict,
    )
}

/// Evaluates command-line inputs in order
#[must_use]
pub fn evaluate_inputs(inputs: &[String], json_input: bool) -> BatchReport {
    let mode = if json_input {
        InputMode::Json
    } else {
        InputMode::Raw
    };
    BatchReport::from_lines(inputs, mode)
}
