//! Error types for room parameter validation and script emission.

use thiserror::Error;

/// Stable error codes for room generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// R001: No segments were given
    NoSegments,
    /// R002: A numeric parameter is NaN or infinite
    NonFiniteValue,
    /// R003: Writing the script to its sink failed
    Io,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "R001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NoSegments => "R001",
            ErrorCode::NonFiniteValue => "R002",
            ErrorCode::Io => "R003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while validating room parameters or writing a room script.
#[derive(Debug, Error)]
pub enum RoomError {
    /// The segment pool is empty.
    #[error("at least one segment is required")]
    NoSegments,

    /// A numeric field cannot be written as a Lua number literal.
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The output sink rejected a write or flush.
    #[error("failed to write room script: {0}")]
    Io(#[from] std::io::Error),
}

impl RoomError {
    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RoomError::NoSegments => ErrorCode::NoSegments,
            RoomError::NonFiniteValue { .. } => ErrorCode::NonFiniteValue,
            RoomError::Io(_) => ErrorCode::Io,
        }
    }
}
