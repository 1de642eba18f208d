//! Adapter between orchestrator task events and the computation service.

use super::error::rfc3339;
use super::{HandlingFailure, MappingError, TaskAdapterError};
use crate::computation::{
    domain::{ComputationRequest, FileResource, FileSlots, FileType, TriggerOrigin},
    ports::{ComputationClient, PresignedUrlProvider},
};
use crate::config::AdapterConfig;
use crate::event::domain::{ProcessRun, RunId, TaskEvent, TaskStatus};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of handling one task event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskHandling {
    /// A run request was submitted to the computation service.
    Dispatched,
    /// The task was not ready; nothing was submitted.
    Skipped(TaskStatus),
}

/// Task event handling service.
#[derive(Clone)]
pub struct TaskEventAdapter<C, S>
where
    C: ComputationClient,
    S: PresignedUrlProvider,
{
    client: Arc<C>,
    storage: Arc<S>,
    url_expiry_hours: u32,
}

impl<C, S> TaskEventAdapter<C, S>
where
    C: ComputationClient,
    S: PresignedUrlProvider,
{
    /// Creates an adapter submitting requests to `client` and sharing input
    /// files through `storage`.
    #[must_use]
    pub const fn new(client: Arc<C>, storage: Arc<S>, config: &AdapterConfig) -> Self {
        Self {
            client,
            storage,
            url_expiry_hours: config.url_expiry_hours,
        }
    }

    /// Handles an event received on the manual subscription.
    ///
    /// # Errors
    ///
    /// See [`TaskEventAdapter::handle`].
    pub async fn consume_task(
        &self,
        event: &TaskEvent,
    ) -> Result<TaskHandling, TaskAdapterError> {
        self.handle(event, TriggerOrigin::Manual).await
    }

    /// Handles an event received on the automatic subscription.
    ///
    /// # Errors
    ///
    /// See [`TaskEventAdapter::handle`].
    pub async fn consume_auto_task(
        &self,
        event: &TaskEvent,
    ) -> Result<TaskHandling, TaskAdapterError> {
        self.handle(event, TriggerOrigin::Automatic).await
    }

    /// Submits a run request for `event` when the task is ready or finished.
    ///
    /// Events in any other status are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAdapterError`] when the request cannot be built or the
    /// computation service fails; the error keeps the task context and the
    /// original failure.
    pub async fn handle(
        &self,
        event: &TaskEvent,
        origin: TriggerOrigin,
    ) -> Result<TaskHandling, TaskAdapterError> {
        let status = event.status();
        if !status.is_ready_or_finished() {
            warn!(
                task_id = %event.id(),
                %origin,
                timestamp = %rfc3339(&event.timestamp()),
                %status,
                "skipping run request because the task is not ready yet"
            );
            return Ok(TaskHandling::Skipped(status));
        }

        info!(
            task_id = %event.id(),
            %origin,
            timestamp = %rfc3339(&event.timestamp()),
            "handling run request"
        );
        self.dispatch(event, origin)
            .await
            .map_err(|cause| TaskAdapterError::new(event, origin, cause))?;
        Ok(TaskHandling::Dispatched)
    }

    /// Builds the computation request for `event`.
    ///
    /// Every input file is shared through a presigned URL and placed in the
    /// slot of its type; the run identifier is the most recent entry of the
    /// run history.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnknownFileType`] for an unexpected type tag,
    /// [`MappingError::NoRunHistory`] when the task was never run,
    /// [`MappingError::Slot`] when a file type is missing or repeated, and
    /// [`MappingError::Storage`] when a URL cannot be produced.
    pub fn map_to_request(
        &self,
        event: &TaskEvent,
        origin: TriggerOrigin,
    ) -> Result<ComputationRequest, MappingError> {
        let mut slots = FileSlots::new();
        for input in event.inputs() {
            let url = self
                .storage
                .presigned_url(input.file_path(), self.url_expiry_hours)?;
            let file_type = FileType::from_str(input.file_type())?;
            debug!(
                task_id = %event.id(),
                %file_type,
                filename = input.filename(),
                "resolved input file"
            );
            slots.assign(file_type, FileResource::new(input.filename(), url))?;
        }

        let run_id = current_run_id(event, origin)?;
        let files = slots.into_files()?;
        Ok(ComputationRequest::new(
            event.id(),
            run_id,
            event.timestamp(),
            files,
            origin,
        ))
    }

    async fn dispatch(
        &self,
        event: &TaskEvent,
        origin: TriggerOrigin,
    ) -> Result<(), HandlingFailure> {
        let request = self.map_to_request(event, origin)?;
        debug!(
            task_id = %request.id(),
            run_id = %request.current_run_id(),
            launched_automatically = request.launched_automatically(),
            "submitting computation request"
        );
        self.client.run(&request).await?;
        Ok(())
    }
}

/// Returns the identifier of the most recent run of `event`.
///
/// Runs are ranked by execution date; among runs executed at the same
/// instant the one listed first wins.
///
/// # Errors
///
/// Returns [`MappingError::NoRunHistory`] when the run history is empty.
pub fn current_run_id(event: &TaskEvent, origin: TriggerOrigin) -> Result<RunId, MappingError> {
    event
        .run_history()
        .iter()
        .rev()
        .max_by_key(|run| run.execution_date())
        .map(ProcessRun::id)
        .ok_or_else(|| {
            warn!(
                task_id = %event.id(),
                %origin,
                timestamp = %rfc3339(&event.timestamp()),
                "cannot handle run request because the task has no run history"
            );
            MappingError::NoRunHistory {
                origin,
                timestamp: event.timestamp(),
            }
        })
}
