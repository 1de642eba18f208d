//! Shared world state for task event dispatch BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::url_provider;
use core_valid_intraday_adapter::{
    computation::adapters::memory::{RecordingComputationClient, StaticUrlProvider},
    config::AdapterConfig,
    event::domain::TaskEvent,
    listener::{ListenerError, TaskEventListener, TaskHandling},
};
use rstest::fixture;

/// Listener type used by the BDD world.
pub type TestListener = TaskEventListener<RecordingComputationClient, StaticUrlProvider>;

/// Scenario world for task event dispatch behaviour tests.
pub struct TaskDispatchWorld {
    pub client: RecordingComputationClient,
    pub listener: TestListener,
    pub pending_event: Option<TaskEvent>,
    pub last_result: Option<Result<TaskHandling, ListenerError>>,
}

impl TaskDispatchWorld {
    /// Creates a world listening with the default channel bindings.
    #[must_use]
    pub fn new() -> Self {
        let client = RecordingComputationClient::new();
        let listener = TaskEventListener::from_config(
            Arc::new(client.clone()),
            Arc::new(url_provider()),
            &AdapterConfig::default(),
        );

        Self {
            client,
            listener,
            pending_event: None,
            last_result: None,
        }
    }
}

impl Default for TaskDispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDispatchWorld {
    TaskDispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
