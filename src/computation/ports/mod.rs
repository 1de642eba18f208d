//! Port contracts for the computation service and object storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the task event
//! adapter.

pub mod client;
pub mod storage;

pub use client::{ComputationClient, ComputationClientError, ComputationClientResult};
pub use storage::{PresignedUrlError, PresignedUrlProvider, PresignedUrlResult};
