//! Error types for time conversion.

use thiserror::Error;

/// Errors raised while parsing, validating or formatting a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// No time was supplied, or it was blank.
    #[error("time parameter is required")]
    MissingInput,

    /// The input could not be read as `HH:mm`.
    #[error("{0}")]
    MalformedTime(String),

    #[error("hour must be between 0 and 23")]
    HourOutOfRange,

    #[error("minute must be between 0 and 59")]
    MinuteOutOfRange,

    /// A number outside the range covered by the word tables.
    #[error("number out of range: {0}")]
    OutOfRange(i32),

    /// No formatter is registered under the requested key.
    #[error("Unknown formatter: {0}")]
    UnknownFormatter(String),

    /// A batch could not be processed as a whole.
    #[error("Invalid CSV format or unreadable input: {0}")]
    InvalidFile(String),
}

impl TimeError {
    /// The input does not have exactly two `:` separated parts.
    pub fn bad_format() -> Self {
        Self::MalformedTime("time must be in HH:mm format".to_string())
    }

    /// A part of the input is not an integer.
    pub fn bad_number() -> Self {
        Self::MalformedTime("invalid numeric time format".to_string())
    }

    /// Wrap another error as a batch-level failure.
    pub fn invalid_file(detail: impl Into<String>) -> Self {
        Self::InvalidFile(detail.into())
    }

    /// Whether this error concerns a whole batch rather than a single time.
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::InvalidFile(_))
    }
}

/// Result type alias using [`TimeError`].
pub type Result<T> = std::result::Result<T, TimeError>;
