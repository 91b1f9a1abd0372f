//! JSON formatter, minifier, validator and structural diff.

pub mod diff;
pub mod format;
pub mod handlers;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Where a parse failed, 1-based like editors show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseLocation {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<&serde_json::Error> for ParseLocation {
    fn from(err: &serde_json::Error) -> Self {
        ParseLocation {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonToolError {
    #[error("invalid JSON in {document} at {location}")]
    Parse {
        document: &'static str,
        location: ParseLocation,
    },

    #[error("indent must be between 1 and {max} spaces (got {given})")]
    InvalidIndent { given: usize, max: usize },

    #[error("failed to serialize JSON: {0}")]
    Serialize(String),
}

/// Parses `input`, naming `document` in the error so diffs can say which side failed.
pub(crate) fn parse_document(
    document: &'static str,
    input: &str,
) -> Result<serde_json::Value, JsonToolError> {
    serde_json::from_str(input).map_err(|e| JsonToolError::Parse {
        document,
        location: ParseLocation::from(&e),
    })
}
