//! Input file types understood by the computation service.

use super::ParseFileTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag of a computation input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    /// Critical network elements with their remaining available margins.
    #[serde(rename = "CNEC-RAM")]
    CnecRam,
    /// Vertices of the flow-based domain.
    #[serde(rename = "VERTICE")]
    Vertice,
    /// Common grid model.
    #[serde(rename = "CGM")]
    Cgm,
    /// Generation and load shift keys.
    #[serde(rename = "GLSK")]
    Glsk,
    /// Merged critical network elements and contingencies.
    #[serde(rename = "MERGED-CNEC")]
    MergedCnec,
    /// Market clearing point.
    #[serde(rename = "MARKET-POINT")]
    MarketPoint,
    /// Preventive remedial actions.
    #[serde(rename = "PRA")]
    Pra,
}

impl FileType {
    /// Every file type, in request slot order.
    pub const ALL: [Self; 7] = [
        Self::CnecRam,
        Self::Vertice,
        Self::Cgm,
        Self::Glsk,
        Self::MergedCnec,
        Self::MarketPoint,
        Self::Pra,
    ];

    /// Returns the tag used by the task orchestrator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CnecRam => "CNEC-RAM",
            Self::Vertice => "VERTICE",
            Self::Cgm => "CGM",
            Self::Glsk => "GLSK",
            Self::MergedCnec => "MERGED-CNEC",
            Self::MarketPoint => "MARKET-POINT",
            Self::Pra => "PRA",
        }
    }
}

impl FromStr for FileType {
    type Err = ParseFileTypeError;

    /// Tags are matched exactly, as published by the orchestrator.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|file_type| file_type.as_str() == value)
            .ok_or_else(|| ParseFileTypeError(value.to_owned()))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
