//! Error types for task event parsing.

use thiserror::Error;

/// Error returned while parsing task statuses from raw strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
