#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Fixed-arity case tuples.
//!
//! A case is one ordered tuple of input values checked independently of
//! its siblings. Arity is fixed per registry by the tuple type itself, so
//! mixing arities across chained registrations is a compile error rather
//! than a runtime surprise.

use std::fmt::Display;

/// Outcome of one verifier invocation: `Ok(())` or a failure detail.
pub type CheckResult = std::result::Result<(), String>;

/// Records a failed check with the given detail when `condition` is false.
///
/// The one assertion helper verifiers need:
///
/// ```
/// use casewise_core::ensure;
///
/// let check = |x: i64, y: i64, z: i64| ensure(x + y == z, format!("{x} + {y} != {z}"));
/// assert!(check(2, 2, 4).is_ok());
/// assert!(check(5, 4, 10).is_err());
/// ```
pub fn ensure(condition: bool, detail: impl Into<String>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(detail.into())
    }
}

/// An ordered tuple of input values, rendered positionally into labels.
///
/// Implemented for tuples of arity 1 through 6 whose elements are
/// `Display + Clone`. `values` returns the rendered elements in tuple
/// order, always exactly `ARITY` entries.
pub trait CaseValues: Clone {
    /// Number of values in one case. At least 1.
    const ARITY: usize;

    /// Renders every value in positional order.
    fn values(&self) -> Vec<String>;
}

macro_rules! impl_case_values {
    ($arity:expr => $($name:ident : $idx:tt),+) => {
        impl<$($name),+> CaseValues for ($($name,)+)
        where
            $($name: Display + Clone),+
        {
            const ARITY: usize = $arity;

            fn values(&self) -> Vec<String> {
                vec![$(self.$idx.to_string()),+]
            }
        }
    };
}

impl_case_values!(1 => A: 0);
impl_case_values!(2 => A: 0, B: 1);
impl_case_values!(3 => A: 0, B: 1, C: 2);
impl_case_values!(4 => A: 0, B: 1, C: 2, D: 3);
impl_case_values!(5 => A: 0, B: 1, C: 2, D: 3, E: 4);
impl_case_values!(6 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
