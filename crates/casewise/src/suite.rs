#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Scenario entry points.
//!
//! `describe` names a scenario and hands the closure a registry to chain
//! cases on:
//!
//! ```
//! use casewise::{describe, ensure};
//!
//! # fn main() -> casewise::Result<()> {
//! let report = describe("a pair of numbers and their sum", |it| {
//!     it.uses((2, 2, 4))?
//!         .and((3, 3, 6))?
//!         .and((5, 4, 9))?
//!         .to_show("{} and {} should be {}", |&(x, y, z)| {
//!             ensure(x + y == z, format!("{x} + {y} != {z}"))
//!         })?;
//!     Ok(())
//! })?;
//! assert!(report.all_passed());
//! # Ok(())
//! # }
//! ```

use casewise_core::{CaseValues, Error, Registry, Reporter, Result, SuiteReport, TracingReporter};

/// Runs a named scenario, logging outcomes through `tracing`.
///
/// # Errors
///
/// Propagates registry errors from the closure and returns
/// `NotFinalized` when the closure finishes without calling `to_show`.
pub fn describe<C, F>(description: &str, spec_fn: F) -> Result<SuiteReport>
where
    C: CaseValues,
    F: FnOnce(&mut Registry<C>) -> Result<()>,
{
    describe_with(description, Box::new(TracingReporter), spec_fn)
}

/// Runs a named scenario with an injected reporting collaborator.
///
/// # Errors
///
/// Same conditions as [`describe`].
pub fn describe_with<C, F>(
    description: &str,
    reporter: Box<dyn Reporter>,
    spec_fn: F,
) -> Result<SuiteReport>
where
    C: CaseValues,
    F: FnOnce(&mut Registry<C>) -> Result<()>,
{
    let mut registry = Registry::named(description).with_reporter(reporter);
    spec_fn(&mut registry)?;
    registry
        .report()
        .cloned()
        .ok_or_else(|| Error::not_finalized(description))
}
