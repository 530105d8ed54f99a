//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one command plus
//! the pure helpers it is built from.

pub mod batch;
pub mod check;
pub mod config;
pub mod next;
pub mod seq;

pub use batch::{build_report, execute_batch, read_lines};
pub use check::{describe_token, execute_check};
pub use config::execute_config;
pub use next::{evaluate_inputs, execute_next};
pub use seq::{execute_seq, generate};

use crate::error::{CliError, CliResult};
use crate::output::{render_report, OutputFormat, Reporter};
use token_increment::BatchReport;

/// Prints a report and enforces `--strict`
pub(crate) fn emit_report(
    reporter: &Reporter,
    report: &BatchReport,
    format: OutputFormat,
    strict: bool,
) -> CliResult<()> {
    if !(report.is_empty() && format == OutputFormat::Text) {
        reporter.result(&render_report(report, format)?)?;
    }

    if strict && report.invalid() > 0 {
        return Err(CliError::Rejected {
            count: report.invalid(),
        });
    }
    Ok(())
}
