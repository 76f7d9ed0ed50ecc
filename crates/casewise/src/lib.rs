//! # Casewise
//!
//! Data-driven specification suites - strictly functional Rust with zero
//! unwraps.
//!
//! Register any number of fixed-arity case tuples, then run one verifier
//! per case. Every case gets a label rendered from a positional template,
//! a failing case never silences its siblings, and the aggregate verdict
//! plus per-case outcomes land in a [`SuiteReport`].
//!
//! ```
//! use casewise::prelude::*;
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
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only

pub mod jsonl;
pub mod suite;

pub use casewise_core::{
    ensure, CaseOutcome, CaseSet, CaseStatus, CaseValues, CheckResult, CollectingReporter, Error,
    FormatTemplate, NullReporter, Registry, Reporter, Result, ResultExt, SuiteReport,
    TracingReporter,
};
pub use jsonl::{JsonlConfig, JsonlReporter};
pub use suite::{describe, describe_with};

/// The working set for writing suites.
pub mod prelude {
    pub use crate::{
        describe, describe_with, ensure, CaseSet, Registry, Reporter, Result, SuiteReport,
    };
}
