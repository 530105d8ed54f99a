//! Output formatting and status reporting
//!
//! Results go to stdout unstyled. Status lines go to stderr and may be
//! coloured.

use clap::ValueEnum;
use console::{style, Style, Term};
use serde::{Deserialize, Serialize};
use token_increment::BatchReport;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Writes results and status lines
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a result line to stdout
    pub fn result(&self, line: &str) -> std::io::Result<()> {
        self.out.write_line(line)
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "PASS".to_string()
        };
        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Failures print even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };
        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a batch summary line
    pub fn summary(&self, report: &BatchReport) {
        if self.quiet && report.invalid() == 0 {
            return;
        }
        let _ = self.err.write_line(&format_summary(report, self.use_color));
    }
}

/// Summary line for a batch run
#[must_use]
pub fn format_summary(report: &BatchReport, use_color: bool) -> String {
    let (valid, invalid) = (report.valid(), report.invalid());
    if use_color {
        let ok = Style::new().green().bold();
        let bad = Style::new().red().bold();
        let status = if invalid > 0 {
            bad.apply_to("REJECTED")
        } else {
            ok.apply_to("OK")
        };
        format!(
            "{status} {} input(s) ({} valid, {} rejected)",
            report.len(),
            ok.apply_to(valid),
            if invalid > 0 {
                bad.apply_to(invalid).to_string()
            } else {
                invalid.to_string()
            }
        )
    } else {
        let status = if invalid > 0 { "REJECTED" } else { "OK" };
        format!(
            "{status} {} input(s) ({valid} valid, {invalid} rejected)",
            report.len()
        )
    }
}

/// JSON rendering of a batch report
pub fn render_report_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Renders a batch report: one output per line, or the JSON report
pub fn render_report(report: &BatchReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.outputs().collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => render_report_json(report),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use token_increment::InputMode;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_serde() {
        let f: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, OutputFormat::Json);
        assert_eq!(serde_json::to_string(&OutputFormat::Text).unwrap(), "\"text\"");
    }

    #[test]
    fn test_summary_plain() {
        let report = BatchReport::from_lines(["A1", "x"], InputMode::Raw);
        assert_eq!(
            format_summary(&report, false),
            "REJECTED 2 input(s) (1 valid, 1 rejected)"
        );
    }

    #[test]
    fn test_summary_all_valid() {
        let report = BatchReport::from_lines(["A1"], InputMode::Raw);
        assert_eq!(format_summary(&report, false), "OK 1 input(s) (1 valid, 0 rejected)");
    }

    #[test]
    fn test_render_report_json() {
        let report = BatchReport::from_lines(["F001"], InputMode::Raw);
        let json = render_report_json(&report).unwrap();
        assert!(json.contains("\"output\": \"F002\""));
    }

    #[test]
    fn test_render_report_text() {
        let report = BatchReport::from_lines(["A9", "", "B01"], InputMode::Raw);
        assert_eq!(
            render_report(&report, OutputFormat::Text).unwrap(),
            "A10\nError\nB02"
        );
    }

    #[test]
    fn test_render_report_json_format() {
        let report = BatchReport::from_lines(["A9"], InputMode::Raw);
        let rendered = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["entries"][0]["output"], "A10");
    }

    #[test]
    fn test_reporter_quiet_flags() {
        let reporter = Reporter::new(false, true);
        assert!(reporter.quiet);
        assert!(!reporter.use_color);
    }
}
