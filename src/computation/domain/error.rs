//! Error types for computation request construction.

use super::FileType;
use thiserror::Error;

/// Error returned when a raw tag names no known file type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unexpected value: {0}")]
pub struct ParseFileTypeError(pub String);

/// Errors returned while filling the file slots of a request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FileSlotError {
    /// Two input files carry the same type tag.
    #[error("more than one input file of type {0}")]
    DuplicateFile(FileType),

    /// No input file carries the type tag.
    #[error("missing input file of type {0}")]
    MissingFile(FileType),
}
