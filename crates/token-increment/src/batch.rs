//! Batch evaluation with a serialisable report
//!
//! Mirrors a history log: each input is kept next to its output, in order.

use crate::increment::{evaluate, SENTINEL};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How batch lines are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Each line is taken verbatim as a string input
    #[default]
    Raw,
    /// Each line is parsed as a JSON value first
    Json,
}

/// One evaluated input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// The input as received
    pub input: Value,
    /// The successor token or the sentinel
    pub output: String,
    /// Whether the input was a valid token
    pub valid: bool,
}

impl BatchEntry {
    /// Evaluates `input` into an entry
    #[must_use]
    pub fn evaluate(input: Value) -> Self {
        let outcome = evaluate(&input);
        Self {
            valid: !outcome.is_invalid(),
            output: outcome.as_output(),
            input,
        }
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        match &self.input {
            Value::String(s) => format!("{s} -> {}", self.output),
            other => format!("{other} -> {}", self.output),
        }
    }
}

/// Ordered results of a batch run
///
/// Only built by evaluation, so `valid` always agrees with `output`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Creates an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a batch of lines
    #[must_use]
    pub fn from_lines<I, S>(lines: I, mode: InputMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Self::new();
        for line in lines {
            report.push_line(line.as_ref(), mode);
        }
        report
    }

    /// Evaluates and records one line
    ///
    /// In [`InputMode::Json`], a line that is not valid JSON is recorded as
    /// a rejected string input.
    pub fn push_line(&mut self, line: &str, mode: InputMode) {
        match mode {
            InputMode::Raw => self.push_str(line),
            InputMode::Json => match serde_json::from_str::<Value>(line) {
                Ok(value) => self.push_value(value),
                Err(err) => {
                    tracing::debug!(error = %err, line, "batch line is not JSON");
                    self.push_rejected(line);
                }
            },
        }
    }

    /// Records an input that never reached the engine (unreadable line,
    /// bad JSON) with the sentinel output
    pub fn push_rejected(&mut self, raw: &str) {
        self.entries.push(BatchEntry {
            input: Value::String(raw.to_string()),
            output: SENTINEL.to_string(),
            valid: false,
        });
    }

    /// Evaluates and records a string input
    pub fn push_str(&mut self, input: &str) {
        self.push_value(Value::String(input.to_string()));
    }

    /// Evaluates and records an arbitrary input
    pub fn push_value(&mut self, input: Value) {
        self.entries.push(BatchEntry::evaluate(input));
    }

    /// All entries, in input order
    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was evaluated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of valid inputs
    #[must_use]
    pub fn valid(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Number of rejected inputs
    #[must_use]
    pub fn invalid(&self) -> usize {
        self.len() - self.valid()
    }

    /// Outputs only, in input order
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.output.as_str())
    }
}
