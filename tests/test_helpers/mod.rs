//! Shared task event fixtures for integration and behaviour tests.

use chrono::{DateTime, FixedOffset};
use core_valid_intraday_adapter::{
    computation::adapters::memory::StaticUrlProvider,
    event::domain::{ProcessFile, ProcessRun, RunId, TaskEvent, TaskId, TaskStatus},
};

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

/// Parses an RFC 3339 timestamp.
///
/// # Panics
///
/// Panics when the timestamp is malformed.
#[must_use]
pub fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 timestamp")
}

/// Storage serving a URL for every fixture input path.
#[must_use]
pub fn url_provider() -> StaticUrlProvider {
    INPUTS
        .iter()
        .fold(StaticUrlProvider::new(), |provider, (_, path, _, url)| {
            provider.with_url(*path, *url)
        })
}

/// Task carrying all seven input files and no run history.
#[must_use]
pub fn task_without_history(status: TaskStatus) -> TaskEvent {
    let inputs = INPUTS
        .iter()
        .map(|(file_type, path, filename, _)| ProcessFile::new(*file_type, *path, *filename));
    TaskEvent::new(TaskId::new(), at("2025-10-02T14:30:00Z"), status).with_inputs(inputs)
}

/// Task carrying all seven input files and a single recorded run.
#[must_use]
pub fn task_with_run(status: TaskStatus, run_id: RunId) -> TaskEvent {
    task_without_history(status)
        .with_run_history([ProcessRun::new(run_id, at("2025-10-02T15:00:00Z"))])
}
