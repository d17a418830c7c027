#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! error defines the single validation error class used across the crate.

use thiserror::Error;

/// Result is the crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error is returned when an input fails validation. Validation always happens before any byte is
/// drawn from a byte source, so an error never leaves a source partially consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied parameter was rejected.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// The name of the parameter that failed validation.
        parameter: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// parameter returns the name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Error::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // the display string should name both the parameter and the reason.
    fn check_display() {
        let err = Error::invalid_argument("n_words", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument `n_words`: must be at least 1, got 0"
        );
        assert_eq!(err.parameter(), "n_words");
    }
}
