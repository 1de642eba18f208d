//! Routing of raw event bus payloads to the task event adapter.

use super::{ListenerError, TaskEventAdapter, TaskHandling};
use crate::computation::ports::{ComputationClient, PresignedUrlProvider};
use crate::config::{AdapterConfig, ChannelBindings};
use crate::event::domain::TaskEvent;
use std::sync::Arc;
use tracing::warn;

/// Listener bound to the manual and automatic task subscriptions.
#[derive(Clone)]
pub struct TaskEventListener<C, S>
where
    C: ComputationClient,
    S: PresignedUrlProvider,
{
    adapter: TaskEventAdapter<C, S>,
    channels: ChannelBindings,
}

impl<C, S> TaskEventListener<C, S>
where
    C: ComputationClient,
    S: PresignedUrlProvider,
{
    /// Creates a listener routing the bound channels to `adapter`.
    #[must_use]
    pub const fn new(adapter: TaskEventAdapter<C, S>, channels: ChannelBindings) -> Self {
        Self { adapter, channels }
    }

    /// Creates a listener and its adapter from configuration.
    #[must_use]
    pub fn from_config(client: Arc<C>, storage: Arc<S>, config: &AdapterConfig) -> Self {
        Self::new(
            TaskEventAdapter::new(client, storage, config),
            config.channels.clone(),
        )
    }

    /// Returns the adapter events are routed to.
    #[must_use]
    pub const fn adapter(&self) -> &TaskEventAdapter<C, S> {
        &self.adapter
    }

    /// Returns the channel bindings.
    #[must_use]
    pub const fn channels(&self) -> &ChannelBindings {
        &self.channels
    }

    /// Decodes a JSON task event received on `channel` and handles it with
    /// the trigger origin bound to that channel.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::UnknownChannel`] for unbound channels,
    /// [`ListenerError::Decode`] for payloads that are not task events, and
    /// [`ListenerError::Adapter`] when handling fails.
    pub async fn consume(
        &self,
        channel: &str,
        payload: &[u8],
    ) -> Result<TaskHandling, ListenerError> {
        let origin = self.channels.origin_for(channel).ok_or_else(|| {
            warn!(channel, "received task event on an unbound channel");
            ListenerError::UnknownChannel(channel.to_owned())
        })?;
        let event: TaskEvent = serde_json::from_slice(payload)?;
        Ok(self.adapter.handle(&event, origin).await?)
    }
}
