//! JSON output types for machine-readable CLI output.
//!
//! Printed instead of colored status lines when `--json` is given, so other
//! tools can tell what was generated without parsing human output.

use roomgen_room::RoomError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Room parameter errors pass through their own codes (`R001`, ...).
pub mod error_codes {
    /// Parsed options could not be converted into room parameters
    pub const INVALID_OPTIONS: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "R001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&RoomError> for JsonError {
    fn from(error: &RoomError) -> Self {
        Self::new(error.code().code(), error.to_string())
    }
}

/// JSON output for a generate run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether the room was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Details of the written room (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Details of a written room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Output path, or "-" for stdout
    pub output: String,
    /// Number of segments registered in the pool
    pub segment_count: usize,
    /// Bytes written
    pub bytes: usize,
    /// BLAKE3 hash of the script text
    pub script_hash: String,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
