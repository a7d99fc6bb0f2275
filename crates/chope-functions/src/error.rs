//! Error types for style function arguments.

use thiserror::Error;

/// Raised when a style function is given arguments CSS would reject.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// An argument has the wrong shape or unit.
    #[error("invalid argument for {function}(): {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(function: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }
}
