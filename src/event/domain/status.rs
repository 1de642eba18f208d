//! Task status as reported by the orchestrator.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an orchestrator task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task slot exists but no input has arrived.
    NotCreated,
    /// Some inputs have arrived; the task is not complete yet.
    Created,
    /// All inputs are available and the task can be run.
    Ready,
    /// A run has been requested and is waiting to start.
    Pending,
    /// A run is in progress.
    Running,
    /// The latest run finished successfully.
    Success,
    /// The latest run failed.
    Error,
    /// A stop has been requested for the running task.
    Stopping,
    /// The latest run was interrupted.
    Interrupted,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotCreated => "NOT_CREATED",
            Self::Created => "CREATED",
            Self::Ready => "READY",
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Stopping => "STOPPING",
            Self::Interrupted => "INTERRUPTED",
        }
    }

    /// Returns `true` when a run request may be dispatched for this status.
    ///
    /// Finished tasks (`SUCCESS` and `ERROR`) are eligible so that an
    /// operator can re-run them.
    #[must_use]
    pub const fn is_ready_or_finished(self) -> bool {
        matches!(self, Self::Ready | Self::Success | Self::Error)
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NOT_CREATED" => Ok(Self::NotCreated),
            "CREATED" => Ok(Self::Created),
            "READY" => Ok(Self::Ready),
            "PENDING" => Ok(Self::Pending),
            "RUNNING" => Ok(Self::Running),
            "SUCCESS" => Ok(Self::Success),
            "ERROR" => Ok(Self::Error),
            "STOPPING" => Ok(Self::Stopping),
            "INTERRUPTED" => Ok(Self::Interrupted),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
