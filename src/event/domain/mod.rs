//! Domain model for orchestrator task events.

mod error;
mod event;
mod ids;
mod status;

pub use error::ParseTaskStatusError;
pub use event::{ProcessFile, ProcessRun, TaskEvent};
pub use ids::{RunId, TaskId};
pub use status::TaskStatus;
