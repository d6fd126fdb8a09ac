//! Error types for triangle construction, parsing and the console session.

use thiserror::Error;

/// Broad classification of a [`TriangleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was well-formed but not acceptable (e.g. a non-positive side).
    InvalidArgument,
    /// Input text could not be split or parsed into numbers.
    Format,
    /// The input stream itself failed or ran out.
    Input,
}

/// Errors that can occur while building triangles or reading them from input.
#[derive(Debug, Error)]
pub enum TriangleError {
    /// A side length is zero, negative, NaN or infinite.
    #[error("side {name} must be a positive finite number, got {value}")]
    InvalidSide {
        /// Name of the offending side (`a`, `b` or `c`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The input did not contain the expected number of comma-separated values.
    #[error("expected {expected} comma-separated values, found {found}")]
    WrongValueCount {
        /// Number of values required.
        expected: usize,
        /// Number of values present.
        found: usize,
    },

    /// A token could not be parsed as a number.
    #[error("invalid number format: '{token}'")]
    InvalidNumber {
        /// The token as it appeared after trimming.
        token: String,
    },

    /// A prompt was answered incorrectly too many times.
    #[error("gave up reading the {what} after {attempts} attempts")]
    AttemptsExhausted {
        /// What was being read.
        what: &'static str,
        /// Number of attempts made.
        attempts: usize,
    },

    /// Input ended before all values were read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TriangleError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriangleError::InvalidSide { .. } => ErrorKind::InvalidArgument,
            TriangleError::WrongValueCount { .. } | TriangleError::InvalidNumber { .. } => {
                ErrorKind::Format
            }
            TriangleError::AttemptsExhausted { .. }
            | TriangleError::UnexpectedEof
            | TriangleError::Io(_) => ErrorKind::Input,
        }
    }

    /// Returns `true` if re-prompting the user can fix this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Input)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangleError>;
