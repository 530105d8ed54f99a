//! Batch command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::BatchArgs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use token_increment::{BatchReport, InputMode};

/// Execute the batch command
pub fn execute_batch(config: &CliConfig, reporter: &Reporter, args: &BatchArgs) -> CliResult<()> {
    let lines = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path).map_err(|e| {
                CliError::invalid_argument(format!("cannot open {}: {e}", path.display()))
            })?;
            read_lines(file)?
        }
        _ => read_lines(std::io::stdin().lock())?,
    };

    let mode = if args.json_input {
        InputMode::Json
    } else {
        InputMode::Raw
    };
    let report = build_report(lines, mode);
    tracing::info!(
        lines = report.len(),
        rejected = report.invalid(),
        ?mode,
        "batch complete"
    );

    super::emit_report(
        reporter,
        &report,
        args.format.unwrap_or(config.format),
        args.strict,
    )?;
    reporter.summary(&report);
    Ok(())
}

/// Reads raw input lines, dropping only the `\n` or `\r\n` terminator
///
/// Lines stay as bytes so one non-UTF-8 line cannot abort the batch.
pub fn read_lines(source: impl Read) -> CliResult<Vec<Vec<u8>>> {
    BufReader::new(source)
        .split(b'\n')
        .map(|line| -> CliResult<Vec<u8>> {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        })
        .collect()
}

/// Evaluates raw lines; a line that is not UTF-8 becomes a rejected entry
#[must_use]
pub fn build_report(lines: Vec<Vec<u8>>, mode: InputMode) -> BatchReport {
    let mut report = BatchReport::new();
    for line in lines {
        match String::from_utf8(line) {
            Ok(text) => report.push_line(&text, mode),
            Err(err) => {
                let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
                tracing::debug!(line = %lossy, "batch line is not UTF-8");
                report.push_rejected(&lossy);
            }
        }
    }
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use token_increment::SENTINEL;

    fn text(lines: &[Vec<u8>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| String::from_utf8(l.clone()).unwrap())
            .collect()
    }

    #[test]
    fn test_read_lines_keeps_whitespace() {
        let lines = read_lines(" A1\nB2 \r\nC3".as_bytes()).unwrap();
        assert_eq!(text(&lines), vec![" A1", "B2 ", "C3"]);
    }

    #[test]
    fn test_read_lines_empty() {
        assert!(read_lines("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_blank_line_is_kept() {
        let lines = read_lines("A1\n\nB2\n".as_bytes()).unwrap();
        assert_eq!(text(&lines), vec!["A1", "", "B2"]);
    }

    #[test]
    fn test_non_utf8_line_is_rejected_not_fatal() {
        let lines = read_lines(&b"A1\n\xff\xfe\nB2\n"[..]).unwrap();
        assert_eq!(lines.len(), 3);

        let report = build_report(lines, InputMode::Raw);
        assert_eq!(
            report.outputs().collect::<Vec<_>>(),
            vec!["A2", SENTINEL, "B3"]
        );
        assert!(!report.entries()[1].valid);
    }

    #[test]
    fn test_non_utf8_line_in_json_mode() {
        let report = build_report(vec![b"\"A9\"".to_vec(), vec![0xc3]], InputMode::Json);
        assert_eq!(report.outputs().collect::<Vec<_>>(), vec!["A10", SENTINEL]);
    }
}
