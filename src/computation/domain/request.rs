//! Computation request aggregate and its file slots.

use super::{FileResource, FileSlotError, FileType, TriggerOrigin};
use crate::event::domain::{RunId, TaskId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Slots being filled while input files are mapped.
///
/// Each [`FileType`] owns exactly one slot; assigning a type twice is
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlots {
    cnec_ram: Option<FileResource>,
    vertice: Option<FileResource>,
    cgm: Option<FileResource>,
    glsk: Option<FileResource>,
    merged_cnec: Option<FileResource>,
    market_point: Option<FileResource>,
    pra: Option<FileResource>,
}

impl FileSlots {
    /// Creates empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a resource in the slot owned by `file_type`.
    ///
    /// # Errors
    ///
    /// Returns [`FileSlotError::DuplicateFile`] when the slot is already
    /// filled.
    pub fn assign(
        &mut self,
        file_type: FileType,
        resource: FileResource,
    ) -> Result<(), FileSlotError> {
        let slot = self.slot_mut(file_type);
        if slot.is_some() {
            return Err(FileSlotError::DuplicateFile(file_type));
        }
        *slot = Some(resource);
        Ok(())
    }

    /// Returns `true` once every slot holds a resource.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.cnec_ram.is_some()
            && self.vertice.is_some()
            && self.cgm.is_some()
            && self.glsk.is_some()
            && self.merged_cnec.is_some()
            && self.market_point.is_some()
            && self.pra.is_some()
    }

    /// Converts the slots into the complete file set of a request.
    ///
    /// # Errors
    ///
    /// Returns [`FileSlotError::MissingFile`] naming the first empty slot in
    /// [`FileType::ALL`] order.
    pub fn into_files(self) -> Result<RequestFiles, FileSlotError> {
        Ok(RequestFiles {
            cnec_ram: self.cnec_ram.ok_or(FileSlotError::MissingFile(FileType::CnecRam))?,
            vertice: self.vertice.ok_or(FileSlotError::MissingFile(FileType::Vertice))?,
            cgm: self.cgm.ok_or(FileSlotError::MissingFile(FileType::Cgm))?,
            glsk: self.glsk.ok_or(FileSlotError::MissingFile(FileType::Glsk))?,
            merged_cnec: self
                .merged_cnec
                .ok_or(FileSlotError::MissingFile(FileType::MergedCnec))?,
            market_point: self
                .market_point
                .ok_or(FileSlotError::MissingFile(FileType::MarketPoint))?,
            pra: self.pra.ok_or(FileSlotError::MissingFile(FileType::Pra))?,
        })
    }

    const fn slot_mut(&mut self, file_type: FileType) -> &mut Option<FileResource> {
        match file_type {
            FileType::CnecRam => &mut self.cnec_ram,
            FileType::Vertice => &mut self.vertice,
            FileType::Cgm => &mut self.cgm,
            FileType::Glsk => &mut self.glsk,
            FileType::MergedCnec => &mut self.merged_cnec,
            FileType::MarketPoint => &mut self.market_point,
            FileType::Pra => &mut self.pra,
        }
    }
}

/// The seven input files of a computation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFiles {
    cnec_ram: FileResource,
    vertice: FileResource,
    cgm: FileResource,
    glsk: FileResource,
    merged_cnec: FileResource,
    market_point: FileResource,
    pra: FileResource,
}

impl RequestFiles {
    /// Returns the resource held in the slot owned by `file_type`.
    #[must_use]
    pub const fn get(&self, file_type: FileType) -> &FileResource {
        match file_type {
            FileType::CnecRam => &self.cnec_ram,
            FileType::Vertice => &self.vertice,
            FileType::Cgm => &self.cgm,
            FileType::Glsk => &self.glsk,
            FileType::MergedCnec => &self.merged_cnec,
            FileType::MarketPoint => &self.market_point,
            FileType::Pra => &self.pra,
        }
    }

    /// Returns the CNEC-RAM file.
    #[must_use]
    pub const fn cnec_ram(&self) -> &FileResource {
        &self.cnec_ram
    }

    /// Returns the VERTICE file.
    #[must_use]
    pub const fn vertice(&self) -> &FileResource {
        &self.vertice
    }

    /// Returns the CGM file.
    #[must_use]
    pub const fn cgm(&self) -> &FileResource {
        &self.cgm
    }

    /// Returns the GLSK file.
    #[must_use]
    pub const fn glsk(&self) -> &FileResource {
        &self.glsk
    }

    /// Returns the MERGED-CNEC file.
    #[must_use]
    pub const fn merged_cnec(&self) -> &FileResource {
        &self.merged_cnec
    }

    /// Returns the MARKET-POINT file.
    #[must_use]
    pub const fn market_point(&self) -> &FileResource {
        &self.market_point
    }

    /// Returns the PRA file.
    #[must_use]
    pub const fn pra(&self) -> &FileResource {
        &self.pra
    }
}

/// Run request sent to the computation service.
///
/// Built fresh for every dispatched task event and dropped once the client
/// call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationRequest {
    id: TaskId,
    current_run_id: RunId,
    timestamp: DateTime<FixedOffset>,
    #[serde(flatten)]
    files: RequestFiles,
    launched_automatically: bool,
}

impl ComputationRequest {
    /// Creates a request for one run of a task.
    #[must_use]
    pub const fn new(
        id: TaskId,
        current_run_id: RunId,
        timestamp: DateTime<FixedOffset>,
        files: RequestFiles,
        origin: TriggerOrigin,
    ) -> Self {
        Self {
            id,
            current_run_id,
            timestamp,
            files,
            launched_automatically: origin.is_automatic(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the run being requested.
    #[must_use]
    pub const fn current_run_id(&self) -> RunId {
        self.current_run_id
    }

    /// Returns the business timestamp of the task.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Returns the input files.
    #[must_use]
    pub const fn files(&self) -> &RequestFiles {
        &self.files
    }

    /// Returns `true` when the orchestrator started the run.
    #[must_use]
    pub const fn launched_automatically(&self) -> bool {
        self.launched_automatically
    }
}
