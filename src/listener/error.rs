//! Error types for task event handling.

use crate::computation::{
    domain::{FileSlotError, ParseFileTypeError, TriggerOrigin},
    ports::{ComputationClientError, PresignedUrlError},
};
use crate::event::domain::{TaskEvent, TaskId};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use thiserror::Error;

/// Renders a task timestamp the way the orchestrator publishes it.
pub(crate) fn rfc3339(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Errors raised while mapping a task event to a computation request.
#[derive(Debug, Clone, Error)]
pub enum MappingError {
    /// An input file carries a type tag outside the known set.
    #[error(transparent)]
    UnknownFileType(#[from] ParseFileTypeError),

    /// The input files do not fill each request slot exactly once.
    #[error(transparent)]
    Slot(#[from] FileSlotError),

    /// The task has never been run, so no run identifier exists.
    #[error(
        "failed to handle {origin} run request on timestamp {} because it has no run history",
        rfc3339(.timestamp)
    )]
    NoRunHistory {
        /// Origin of the rejected run request.
        origin: TriggerOrigin,
        /// Business timestamp of the task.
        timestamp: DateTime<FixedOffset>,
    },

    /// A presigned URL could not be produced for an input file.
    #[error("failed to share input file: {0}")]
    Storage(#[from] PresignedUrlError),
}

/// Failure behind a [`TaskAdapterError`].
#[derive(Debug, Clone, Error)]
pub enum HandlingFailure {
    /// The request could not be built.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// The computation service refused or failed the request.
    #[error(transparent)]
    Dispatch(#[from] ComputationClientError),
}

/// Error returned when a ready task event could not be handled.
///
/// Carries the task context so the event bus can report which run failed;
/// the underlying failure is available through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, Error)]
#[error(
    "error during handling of {origin} run request on TS {}",
    rfc3339(.timestamp)
)]
pub struct TaskAdapterError {
    task_id: TaskId,
    timestamp: DateTime<FixedOffset>,
    origin: TriggerOrigin,
    #[source]
    cause: HandlingFailure,
}

impl TaskAdapterError {
    pub(crate) const fn new(
        event: &TaskEvent,
        origin: TriggerOrigin,
        cause: HandlingFailure,
    ) -> Self {
        Self {
            task_id: event.id(),
            timestamp: event.timestamp(),
            origin,
            cause,
        }
    }

    /// Returns the identifier of the task being handled.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the business timestamp of the task.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the origin of the failed run request.
    #[must_use]
    pub const fn origin(&self) -> TriggerOrigin {
        self.origin
    }

    /// Returns the underlying failure.
    #[must_use]
    pub const fn cause(&self) -> &HandlingFailure {
        &self.cause
    }
}

/// Errors returned by [`TaskEventListener`](super::TaskEventListener).
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The payload arrived on a channel the listener is not bound to.
    #[error("no subscription bound to channel '{0}'")]
    UnknownChannel(String),

    /// The payload is not a task event.
    #[error("failed to decode task event: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded event could not be handled.
    #[error(transparent)]
    Adapter(#[from] TaskAdapterError),
}
