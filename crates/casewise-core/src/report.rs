#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Per-case outcomes, suite reports, and the reporter seam.
//!
//! The registry never prints. It records one [`CaseOutcome`] per case and
//! streams them to an injected [`Reporter`], so the embedding harness
//! decides what a report looks like.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Result of running one case's verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Verifier returned `Ok(())`
    Passed,
    /// Verifier reported a failed check
    Failed,
    /// Verifier panicked inside the failure boundary
    Errored,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// One case's rendered label and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Human-readable label rendered from the format template
    pub label: String,
    /// Pass/fail/error status
    pub status: CaseStatus,
    /// Failure or panic detail, absent for passing cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CaseOutcome {
    /// A passing outcome for `label`.
    pub fn passed(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CaseStatus::Passed,
            detail: None,
        }
    }

    /// A failed-check outcome for `label`.
    pub fn failed(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CaseStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    /// A panicked-verifier outcome for `label`.
    pub fn errored(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CaseStatus::Errored,
            detail: Some(detail.into()),
        }
    }

    /// True when the case passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.status, CaseStatus::Passed)
    }
}

/// Ordered outcomes for every case in one finalized registry.
///
/// Outcomes keep registration order, so reports are deterministic for a
/// given registration sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Scenario description, empty for anonymous registries
    pub description: String,
    /// Per-case outcomes in registration order
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    /// Builds a report from already-recorded outcomes.
    pub fn new(description: impl Into<String>, outcomes: Vec<CaseOutcome>) -> Self {
        Self {
            description: description.into(),
            outcomes,
        }
    }

    /// Number of executed cases.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passing cases.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_pass()).count()
    }

    /// True when every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::is_pass)
    }

    /// The non-passing outcomes, in registration order.
    #[must_use]
    pub fn failures(&self) -> Vec<&CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.is_pass()).collect()
    }

    /// One-line summary suitable for logs.
    #[must_use]
    pub fn summary(&self) -> String {
        let verdict = if self.all_passed() { "pass" } else { "fail" };
        let mut line = format!(
            "{}: {}/{} passed ({verdict})",
            self.description,
            self.pass_count(),
            self.case_count(),
        );
        if !self.all_passed() {
            let failed = self.failures().iter().map(|o| o.label.as_str()).join("; ");
            line.push_str(&format!(" - failing: {failed}"));
        }
        line
    }

    /// Exit code for the embedding harness: 0 all-passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }
}

/// Injected reporting collaborator.
///
/// The registry calls `report_case` once per executed case, in
/// registration order, then `report_suite` exactly once.
pub trait Reporter {
    /// Called after each case executes.
    fn report_case(&mut self, outcome: &CaseOutcome);

    /// Called once after every case has executed.
    fn report_suite(&mut self, report: &SuiteReport);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report_case(&mut self, _outcome: &CaseOutcome) {}

    fn report_suite(&mut self, _report: &SuiteReport) {}
}

/// Reporter emitting structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report_case(&mut self, outcome: &CaseOutcome) {
        match outcome.status {
            CaseStatus::Passed => {
                tracing::info!(label = %outcome.label, status = %outcome.status, "case");
            }
            CaseStatus::Failed | CaseStatus::Errored => {
                tracing::error!(
                    label = %outcome.label,
                    status = %outcome.status,
                    detail = outcome.detail.as_deref().unwrap_or(""),
                    "case"
                );
            }
        }
    }

    fn report_suite(&mut self, report: &SuiteReport) {
        if report.all_passed() {
            tracing::info!(summary = %report.summary(), "suite");
        } else {
            tracing::error!(summary = %report.summary(), "suite");
        }
    }
}

/// Reporter that buffers everything it sees, for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    /// Outcomes in the order they were reported
    pub outcomes: Vec<CaseOutcome>,
    /// Aggregate verdict of the suite report, once received
    pub suite_passed: Option<bool>,
}

impl CollectingReporter {
    /// A new, empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for CollectingReporter {
    fn report_case(&mut self, outcome: &CaseOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn report_suite(&mut self, report: &SuiteReport) {
        self.suite_passed = Some(report.all_passed());
    }
}

// Lets a caller keep a handle on a reporter it hands to a registry.
impl<R: Reporter> Reporter for std::rc::Rc<std::cell::RefCell<R>> {
    fn report_case(&mut self, outcome: &CaseOutcome) {
        self.borrow_mut().report_case(outcome);
    }

    fn report_suite(&mut self, report: &SuiteReport) {
        self.borrow_mut().report_suite(report);
    }
}
