//! Error types for the turnflow context core.
//!
//! The core raises exactly one error kind: [`InvalidArgumentError`], for
//! contract violations the type system cannot rule out (blank service
//! identifiers). Missing service keys are not errors; lookups yield `None`.
//! Transport and pipeline failures never originate here.

use thiserror::Error;

/// Error raised when an operation receives an argument that violates its
/// contract.
///
/// This is a programmer error. It propagates synchronously to the caller;
/// there is no retry or suppression path.
#[derive(Debug, Clone, Error)]
#[error("Invalid argument '{argument}': {message}")]
pub struct InvalidArgumentError {
    /// The name of the offending argument.
    pub argument: String,
    /// What was wrong with it.
    pub message: String,
}

impl InvalidArgumentError {
    /// Creates a new invalid argument error.
    #[must_use]
    pub fn new(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Creates the error for a blank or empty service identifier.
    #[must_use]
    pub fn blank_service_id(argument: impl Into<String>) -> Self {
        Self::new(argument, "service id must be non-empty and non-blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = InvalidArgumentError::new("service_id", "must be non-empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'service_id': must be non-empty"
        );
    }

    #[test]
    fn test_blank_service_id_names_argument() {
        let err = InvalidArgumentError::blank_service_id("service_id");
        assert_eq!(err.argument, "service_id");
        assert!(err.message.contains("non-empty"));
    }
}
