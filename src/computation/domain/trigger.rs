//! Origin of a run request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a run was requested by an operator or by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerOrigin {
    /// Run requested by an operator.
    Manual,
    /// Run started by the orchestrator once the task became ready.
    Automatic,
}

impl TriggerOrigin {
    /// Returns the label used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
        }
    }

    /// Returns `true` for orchestrator-started runs.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Automatic)
    }
}

impl fmt::Display for TriggerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
