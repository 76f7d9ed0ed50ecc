//! # Casewise Core
//!
//! Engine for data-driven specification suites - strictly functional Rust
//! with zero unwraps.
//!
//! A registry accumulates fixed-arity case tuples, then executes one
//! user-supplied verifier per case inside a scoped failure boundary and
//! reports each case's labeled outcome alongside the aggregate verdict.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! Structural problems (empty case set, mutation after finalization, bad
//! templates) return `Result<T, Error>`. A failing or panicking verifier
//! is never an `Error`: it is recorded in the [`SuiteReport`] for its own
//! case and its siblings still run.

pub mod case;
mod error;
pub mod registry;
pub mod report;
pub mod result;
pub mod template;

pub use case::{ensure, CaseValues, CheckResult};
pub use error::Error;
pub use registry::{CaseSet, Registry};
pub use report::{
    CaseOutcome, CaseStatus, CollectingReporter, NullReporter, Reporter, SuiteReport,
    TracingReporter,
};
pub use result::{Result, ResultExt};
pub use template::FormatTemplate;
