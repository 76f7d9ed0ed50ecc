//! Result alias and extension helpers shared across the crate.

use crate::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension methods for [`Result`] values at the process boundary.
pub trait ResultExt {
    /// Exit code for this result: 0 on success, the error's code otherwise.
    fn exit_code(&self) -> i32;
}

impl<T> ResultExt for Result<T> {
    fn exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(err) => err.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_exit_code_is_zero() {
        let result: Result<()> = Ok(());
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_err_exit_code_delegates() {
        let result: Result<()> = Err(Error::already_finalized("and"));
        assert_eq!(result.exit_code(), 4);
    }
}
