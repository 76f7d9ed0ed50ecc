#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Parameterized case registry.
//!
//! Two layers share one execution engine:
//!
//! - [`CaseSet`] is an explicit immutable builder: every chained call
//!   returns a new builder value backed by a persistent vector, and
//!   finalization consumes the builder and produces a [`SuiteReport`].
//! - [`Registry`] is the runtime `Building -> Finalized` state machine
//!   behind `describe`-style chaining (`it.uses(a)?.and(b)?.to_show(..)`),
//!   where finalization is terminal and later mutation is rejected.
//!
//! Cases execute strictly in registration order, one at a time. A single
//! owner drives a registry from one execution context; the type is not
//! thread-safe and never needs to be.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::case::{CaseValues, CheckResult};
use crate::report::{CaseOutcome, NullReporter, Reporter, SuiteReport};
use crate::template::FormatTemplate;
use crate::{Error, Result};

/// Turns a panic payload into a recordable detail string.
fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "verifier panicked".to_string())
        },
        |msg| (*msg).to_string(),
    )
}

/// Executes every case in order against one verifier.
///
/// Each invocation runs inside a scoped failure boundary: a failed check
/// or a panic is recorded for that case alone and never aborts the
/// remaining cases. The template is parsed first, so a template that
/// disagrees with the case arity fails before any verifier runs.
fn execute_cases<C, V>(
    description: &str,
    cases: &im::Vector<C>,
    template: &str,
    verifier: V,
    reporter: &mut dyn Reporter,
) -> Result<SuiteReport>
where
    C: CaseValues,
    V: Fn(&C) -> CheckResult,
{
    if cases.is_empty() {
        return Err(Error::empty_case_set());
    }
    let template = FormatTemplate::parse(template, C::ARITY)?;

    let mut outcomes = Vec::with_capacity(cases.len());
    for case in cases {
        let label = template.render(&case.values());
        let outcome = match catch_unwind(AssertUnwindSafe(|| verifier(case))) {
            Ok(Ok(())) => CaseOutcome::passed(label),
            Ok(Err(detail)) => CaseOutcome::failed(label, detail),
            Err(payload) => CaseOutcome::errored(label, panic_detail(payload.as_ref())),
        };
        reporter.report_case(&outcome);
        outcomes.push(outcome);
    }

    let report = SuiteReport::new(description, outcomes);
    reporter.report_suite(&report);
    Ok(report)
}

/// Immutable builder over a fixed-arity case tuple type.
///
/// Chained calls return new builder values; nothing is shared or mutated
/// across the chain. Finalization consumes the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSet<C: Clone> {
    cases: im::Vector<C>,
}

impl<C: CaseValues> Default for CaseSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CaseValues> CaseSet<C> {
    /// An empty case set. Finalizing it fails with `EmptyCaseSet`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: im::Vector::new(),
        }
    }

    /// Starts a chain with its first case.
    #[must_use]
    pub fn uses(case: C) -> Self {
        Self::new().and(case)
    }

    /// Returns a new builder with `case` appended.
    #[must_use]
    pub fn and(self, case: C) -> Self {
        let mut cases = self.cases;
        cases.push_back(case);
        Self { cases }
    }

    /// Number of registered cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when no case has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Finalizes the builder: runs every case and returns the report.
    ///
    /// # Errors
    ///
    /// `EmptyCaseSet` with zero cases, `ArityMismatch`/`TemplateParse`
    /// for a bad template. Verification failures are never errors; they
    /// land in the report.
    pub fn to_show<V>(self, template: &str, verifier: V) -> Result<SuiteReport>
    where
        V: Fn(&C) -> CheckResult,
    {
        self.to_show_with(template, verifier, &mut NullReporter)
    }

    /// Finalizes the builder, streaming outcomes to `reporter`.
    pub fn to_show_with<V>(
        self,
        template: &str,
        verifier: V,
        reporter: &mut dyn Reporter,
    ) -> Result<SuiteReport>
    where
        V: Fn(&C) -> CheckResult,
    {
        execute_cases("", &self.cases, template, verifier, reporter)
    }
}

enum State<C> {
    Building(im::Vector<C>),
    Finalized(SuiteReport),
}

/// Runtime registry with chained mutation and a terminal finalization.
///
/// State machine: `Building` accepts [`Registry::uses`] and
/// [`Registry::and`]; [`Registry::to_show`] executes every case and moves
/// to `Finalized`, after which any mutation or re-finalization fails with
/// `AlreadyFinalized`. Chaining is railway-oriented:
///
/// ```
/// use casewise_core::{ensure, Registry};
///
/// # fn main() -> casewise_core::Result<()> {
/// let mut it = Registry::named("a pair of numbers and their sum");
/// let report = it
///     .uses((2, 2, 4))?
///     .and((3, 3, 6))?
///     .and((5, 4, 9))?
///     .to_show("{} and {} should be {}", |&(x, y, z)| {
///         ensure(x + y == z, format!("{x} + {y} != {z}"))
///     })?;
/// assert!(report.all_passed());
/// # Ok(())
/// # }
/// ```
///
/// One registry belongs to one owner on one thread; parallel scenarios
/// use independent registries.
pub struct Registry<C> {
    description: String,
    state: State<C>,
    reporter: Box<dyn Reporter>,
}

impl<C> std::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Building(_) => "building",
            State::Finalized(_) => "finalized",
        };
        f.debug_struct("Registry")
            .field("description", &self.description)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl<C: CaseValues> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CaseValues> Registry<C> {
    /// An anonymous registry that reports nowhere.
    #[must_use]
    pub fn new() -> Self {
        Self::named("")
    }

    /// A registry labeled with a scenario description.
    pub fn named(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            state: State::Building(im::Vector::new()),
            reporter: Box::new(NullReporter),
        }
    }

    /// Replaces the injected reporting collaborator.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The scenario description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True once `to_show` has executed.
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized(_))
    }

    /// Registers the first case.
    ///
    /// # Errors
    ///
    /// `AlreadyFinalized` once `to_show` has executed.
    pub fn uses(&mut self, case: C) -> Result<&mut Self> {
        self.append("uses", case)
    }

    /// Registers another case. Callable any number of times.
    ///
    /// # Errors
    ///
    /// `AlreadyFinalized` once `to_show` has executed.
    pub fn and(&mut self, case: C) -> Result<&mut Self> {
        self.append("and", case)
    }

    fn append(&mut self, operation: &str, case: C) -> Result<&mut Self> {
        match &mut self.state {
            State::Building(cases) => {
                cases.push_back(case);
                Ok(self)
            }
            State::Finalized(_) => Err(Error::already_finalized(operation)),
        }
    }

    /// Finalizes the registry: executes every case in registration order
    /// and stores the report. Finalization is terminal.
    ///
    /// # Errors
    ///
    /// `EmptyCaseSet` with zero cases (nothing executes, the registry
    /// stays buildable), `ArityMismatch`/`TemplateParse` for a bad
    /// template (likewise), `AlreadyFinalized` on re-finalization.
    pub fn to_show<V>(&mut self, template: &str, verifier: V) -> Result<&SuiteReport>
    where
        V: Fn(&C) -> CheckResult,
    {
        let report = match &self.state {
            State::Building(cases) => execute_cases(
                &self.description,
                cases,
                template,
                verifier,
                self.reporter.as_mut(),
            )?,
            State::Finalized(_) => return Err(Error::already_finalized("to_show")),
        };
        self.state = State::Finalized(report);
        self.report_stored()
    }

    /// The stored report, once finalized. Reading it never re-executes.
    #[must_use]
    pub const fn report(&self) -> Option<&SuiteReport> {
        match &self.state {
            State::Building(_) => None,
            State::Finalized(report) => Some(report),
        }
    }

    fn report_stored(&self) -> Result<&SuiteReport> {
        self.report()
            .ok_or_else(|| Error::not_finalized(self.description.clone()))
    }
}
