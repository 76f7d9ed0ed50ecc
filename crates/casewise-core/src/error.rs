//! Error types for casewise with categorization:
//!
//! - **Construction errors**: empty case sets, template problems (exit code 1)
//! - **State errors**: mutation after finalization (exit code 4)
//!
//! Per-case verification failures are deliberately absent from this
//! taxonomy: a failing verifier is recorded in the suite report and never
//! propagated as an `Error`.

use std::fmt;

/// Top-level error type for registry construction and finalization.
///
/// Every variant is a structural error raised immediately to the caller
/// building the suite. Outcomes of individual cases live in
/// [`crate::report::CaseOutcome`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Finalization attempted with no registered cases
    EmptyCaseSet,
    /// Mutation or re-finalization attempted after finalization
    AlreadyFinalized {
        /// The operation that was rejected (`uses`, `and`, `to_show`)
        operation: String,
    },
    /// Template placeholder count disagrees with the case arity
    ArityMismatch {
        /// Arity of the registry's case tuples
        expected: usize,
        /// Placeholder count found in the format template
        found: usize,
    },
    /// Format template could not be parsed
    TemplateParse(String),
    /// A scenario block returned without finalizing its registry
    NotFinalized(String),
}

// Convenience constructors using functional patterns
impl Error {
    /// Create an error for finalizing an empty case set.
    #[must_use]
    pub const fn empty_case_set() -> Self {
        Self::EmptyCaseSet
    }

    /// Create an error for an operation rejected after finalization.
    pub fn already_finalized(operation: impl Into<String>) -> Self {
        Self::AlreadyFinalized {
            operation: operation.into(),
        }
    }

    /// Create an error for a template/arity disagreement.
    #[must_use]
    pub const fn arity_mismatch(expected: usize, found: usize) -> Self {
        Self::ArityMismatch { expected, found }
    }

    /// Create an error for a malformed format template.
    pub fn template_parse(msg: impl Into<String>) -> Self {
        Self::TemplateParse(msg.into())
    }

    /// Create an error for a scenario that never finalized.
    pub fn not_finalized(description: impl Into<String>) -> Self {
        Self::NotFinalized(description.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCaseSet => {
                write!(f, "Empty case set: register at least one case before finalizing")
            }
            Self::AlreadyFinalized { operation } => {
                write!(
                    f,
                    "Already finalized: '{operation}' rejected because the registry has executed"
                )
            }
            Self::ArityMismatch { expected, found } => {
                write!(
                    f,
                    "Arity mismatch: cases carry {expected} value(s) but the template has {found} placeholder(s)"
                )
            }
            Self::TemplateParse(msg) => write!(f, "Template parse error: {msg}"),
            Self::NotFinalized(description) => {
                write!(f, "Scenario '{description}' returned without finalizing its cases")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (empty set, bad template, unfinished scenario)
    /// - 4: Invalid state (mutation after finalization)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadyFinalized { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_case_set_display() {
        let err = Error::empty_case_set();
        assert_eq!(
            err.to_string(),
            "Empty case set: register at least one case before finalizing"
        );
    }

    #[test]
    fn test_already_finalized_display() {
        let err = Error::already_finalized("and");
        assert_eq!(
            err.to_string(),
            "Already finalized: 'and' rejected because the registry has executed"
        );
    }

    #[test]
    fn test_arity_mismatch_display() {
        let err = Error::arity_mismatch(3, 2);
        assert_eq!(
            err.to_string(),
            "Arity mismatch: cases carry 3 value(s) but the template has 2 placeholder(s)"
        );
    }

    #[test]
    fn test_template_parse_display() {
        let err = Error::template_parse("unmatched '{'");
        assert_eq!(err.to_string(), "Template parse error: unmatched '{'");
    }

    #[test]
    fn test_not_finalized_display() {
        let err = Error::not_finalized("a pair of numbers");
        assert_eq!(
            err.to_string(),
            "Scenario 'a pair of numbers' returned without finalizing its cases"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::empty_case_set().exit_code(), 1);
        assert_eq!(Error::arity_mismatch(2, 1).exit_code(), 1);
        assert_eq!(Error::template_parse("x").exit_code(), 1);
        assert_eq!(Error::not_finalized("s").exit_code(), 1);
        assert_eq!(Error::already_finalized("uses").exit_code(), 4);
    }

    #[test]
    fn test_error_debug_contains_variant() {
        let err = Error::already_finalized("to_show");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("AlreadyFinalized"));
    }
}
