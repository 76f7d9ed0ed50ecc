#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! JSONL reporter for streaming suite output.
//!
//! Emits one JSON line per case outcome and one suite summary line, so a
//! machine consumer can follow a run as it happens.

use std::io::Write;

use casewise_core::{CaseOutcome, Reporter, SuiteReport};
use serde::Serialize;

/// One emitted line.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OutputLine<'a> {
    Case {
        #[serde(flatten)]
        outcome: &'a CaseOutcome,
    },
    Suite {
        description: &'a str,
        passed: bool,
        case_count: usize,
        pass_count: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonlConfig {
    pub pretty: bool,
    pub flush_on_emit: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            flush_on_emit: true,
        }
    }
}

impl JsonlConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: false,
            flush_on_emit: true,
        }
    }

    #[must_use]
    pub const fn with_pretty(self, pretty: bool) -> Self {
        Self { pretty, ..self }
    }

    #[must_use]
    pub const fn with_flush_on_emit(self, flush_on_emit: bool) -> Self {
        Self {
            flush_on_emit,
            ..self
        }
    }
}

/// Streams case outcomes as JSON lines into any `Write` sink.
pub struct JsonlReporter<W> {
    writer: W,
    config: JsonlConfig,
}

impl<W: Write> JsonlReporter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, JsonlConfig::new())
    }

    #[must_use]
    pub const fn with_config(writer: W, config: JsonlConfig) -> Self {
        Self { writer, config }
    }

    /// Borrow the underlying sink.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the reporter, returning the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, line: &OutputLine<'_>) {
        let serialized = if self.config.pretty {
            serde_json::to_string_pretty(line)
        } else {
            serde_json::to_string(line)
        };
        let written = serialized
            .map_err(std::io::Error::other)
            .and_then(|json| writeln!(self.writer, "{json}"));
        if let Err(err) = written {
            tracing::error!(error = %err, "jsonl emit failed");
            return;
        }
        if self.config.flush_on_emit {
            if let Err(err) = self.writer.flush() {
                tracing::error!(error = %err, "jsonl flush failed");
            }
        }
    }
}

impl<W: Write> Reporter for JsonlReporter<W> {
    fn report_case(&mut self, outcome: &CaseOutcome) {
        self.emit(&OutputLine::Case { outcome });
    }

    fn report_suite(&mut self, report: &SuiteReport) {
        self.emit(&OutputLine::Suite {
            description: &report.description,
            passed: report.all_passed(),
            case_count: report.case_count(),
            pass_count: report.pass_count(),
        });
    }
}

#[cfg(test)]
mod tests {
    use casewise_core::SuiteReport;
    use serde_json::Value;

    use super::*;

    fn lines(buffer: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(buffer)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn test_case_line_carries_label_and_status() {
        let mut reporter = JsonlReporter::new(Vec::new());
        reporter.report_case(&CaseOutcome::passed("2 and 2 should be 4"));

        let emitted = lines(reporter.get_ref());
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0]["type"], "case");
        assert_eq!(emitted[0]["label"], "2 and 2 should be 4");
        assert_eq!(emitted[0]["status"], "passed");
        assert!(emitted[0].get("detail").is_none());
    }

    #[test]
    fn test_failed_case_line_carries_detail() {
        let mut reporter = JsonlReporter::new(Vec::new());
        reporter.report_case(&CaseOutcome::failed("5 and 4 should be 10", "5 + 4 != 10"));

        let emitted = lines(reporter.get_ref());
        assert_eq!(emitted[0]["status"], "failed");
        assert_eq!(emitted[0]["detail"], "5 + 4 != 10");
    }

    #[test]
    fn test_suite_line_carries_aggregate() {
        let report = SuiteReport::new(
            "sums",
            vec![
                CaseOutcome::passed("2 and 2 should be 4"),
                CaseOutcome::failed("5 and 4 should be 10", "5 + 4 != 10"),
            ],
        );
        let mut reporter = JsonlReporter::new(Vec::new());
        reporter.report_suite(&report);

        let emitted = lines(reporter.get_ref());
        assert_eq!(emitted[0]["type"], "suite");
        assert_eq!(emitted[0]["description"], "sums");
        assert_eq!(emitted[0]["passed"], false);
        assert_eq!(emitted[0]["case_count"], 2);
        assert_eq!(emitted[0]["pass_count"], 1);
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let mut reporter = JsonlReporter::new(Vec::new());
        reporter.report_case(&CaseOutcome::passed("one"));
        let buffer = reporter.into_inner();
        assert!(!buffer.is_empty());
    }
}
