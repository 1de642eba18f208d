//! Shared fixtures and port mocks for listener tests.

use crate::computation::{
    adapters::memory::RecordingComputationClient,
    domain::ComputationRequest,
    ports::{
        ComputationClient, ComputationClientResult, PresignedUrlError, PresignedUrlProvider,
        PresignedUrlResult,
    },
};
use crate::config::AdapterConfig;
use crate::event::domain::{ProcessFile, ProcessRun, RunId, TaskEvent, TaskId, TaskStatus};
use crate::listener::TaskEventAdapter;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Client {}

    #[async_trait]
    impl ComputationClient for Client {
        async fn run(&self, request: &ComputationRequest) -> ComputationClientResult<()>;
    }
}

mock! {
    pub Storage {}

    impl PresignedUrlProvider for Storage {
        fn presigned_url(&self, path: &str, expiry_hours: u32) -> PresignedUrlResult<String>;
    }
}

/// Input files of a complete task: type tag, storage path, file name, URL.
pub const INPUTS: [(&str, &str, &str, &str); 7] = [
    ("CNEC-RAM", "/CNEC-RAM", "cnec-ram", "file://CNEC-RAM/cnecram"),
    ("VERTICE", "/VERTICE", "vertice", "file://VERTICE/vertice"),
    ("CGM", "/CGM", "cgm", "file://CGM/cgm.uct"),
    ("GLSK", "/GLSK", "glsk", "file://GLSK/glsk"),
    ("MERGED-CNEC", "/MERGED-CNEC", "merged-cnec", "file://MERGED-CNEC/mergedCnec"),
    ("MARKET-POINT", "/MARKET-POINT", "market-point", "file://MARKET-POINT/marketPoint"),
    ("PRA", "/PRA", "PRA", "file://PRA/pra"),
];

pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp")
}

pub fn task_timestamp() -> DateTime<FixedOffset> {
    at("2025-10-02T14:30:00Z")
}

pub fn process_files() -> Vec<ProcessFile> {
    INPUTS
        .iter()
        .map(|(file_type, path, filename, _)| ProcessFile::new(*file_type, *path, *filename))
        .collect()
}

/// Complete task with a single recorded run.
pub fn event_with_status(status: TaskStatus) -> TaskEvent {
    TaskEvent::new(TaskId::new(), task_timestamp(), status)
        .with_inputs(process_files())
        .with_run_history([ProcessRun::new(RunId::new(), at("2025-10-02T15:00:00Z"))])
}

pub fn url_for(path: &str) -> PresignedUrlResult<String> {
    INPUTS
        .iter()
        .find(|(_, input_path, _, _)| *input_path == path)
        .map(|(_, _, _, url)| (*url).to_owned())
        .ok_or_else(|| PresignedUrlError::ObjectNotFound(path.to_owned()))
}

/// Storage answering every known path, expecting the default one-hour expiry.
pub fn storage() -> MockStorage {
    let mut storage = MockStorage::new();
    storage
        .expect_presigned_url()
        .withf(|_, expiry_hours| *expiry_hours == 1)
        .returning(|path, _| url_for(path));
    storage
}

pub fn adapter_with<C: ComputationClient>(
    client: C,
    storage: MockStorage,
) -> TaskEventAdapter<C, MockStorage> {
    TaskEventAdapter::new(
        Arc::new(client),
        Arc::new(storage),
        &AdapterConfig::default(),
    )
}

pub fn recording_adapter(
    client: &RecordingComputationClient,
) -> TaskEventAdapter<RecordingComputationClient, MockStorage> {
    adapter_with(client.clone(), storage())
}
