//! Task event snapshot and the file and run records it carries.

use super::{RunId, TaskId, TaskStatus};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Input file attached to a task.
///
/// The type tag is kept as the raw string sent by the orchestrator so that
/// unexpected tags can be reported instead of rejected during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessFile {
    file_path: String,
    file_type: String,
    filename: String,
}

impl ProcessFile {
    /// Creates a file descriptor.
    #[must_use]
    pub fn new(
        file_type: impl Into<String>,
        file_path: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            file_type: file_type.into(),
            filename: filename.into(),
        }
    }

    /// Returns the raw file type tag.
    #[must_use]
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Returns the full object-storage path of the file.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Returns the display name of the file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// One past execution of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRun {
    id: RunId,
    execution_date: DateTime<FixedOffset>,
}

impl ProcessRun {
    /// Creates a run record.
    #[must_use]
    pub const fn new(id: RunId, execution_date: DateTime<FixedOffset>) -> Self {
        Self { id, execution_date }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn id(&self) -> RunId {
        self.id
    }

    /// Returns when the run was executed.
    #[must_use]
    pub const fn execution_date(&self) -> DateTime<FixedOffset> {
        self.execution_date
    }
}

/// Snapshot of a task as published by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvent {
    id: TaskId,
    timestamp: DateTime<FixedOffset>,
    status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    inputs: Vec<ProcessFile>,
    #[serde(default, deserialize_with = "null_as_empty")]
    run_history: Vec<ProcessRun>,
}

/// The orchestrator writes `null` for collections it has not populated.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TaskEvent {
    /// Creates an event with no inputs and no run history.
    #[must_use]
    pub const fn new(id: TaskId, timestamp: DateTime<FixedOffset>, status: TaskStatus) -> Self {
        Self {
            id,
            timestamp,
            status,
            inputs: Vec::new(),
            run_history: Vec::new(),
        }
    }

    /// Sets the input files.
    #[must_use]
    pub fn with_inputs(mut self, inputs: impl IntoIterator<Item = ProcessFile>) -> Self {
        self.inputs = inputs.into_iter().collect();
        self
    }

    /// Sets the run history.
    #[must_use]
    pub fn with_run_history(mut self, runs: impl IntoIterator<Item = ProcessRun>) -> Self {
        self.run_history = runs.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the business timestamp the task covers.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the task status at publication time.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the input files.
    #[must_use]
    pub fn inputs(&self) -> &[ProcessFile] {
        &self.inputs
    }

    /// Returns the run history in the order it was published.
    #[must_use]
    pub fn run_history(&self) -> &[ProcessRun] {
        &self.run_history
    }
}
