//! Client port for submitting run requests to the computation service.

use crate::computation::domain::ComputationRequest;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for computation client operations.
pub type ComputationClientResult<T> = Result<T, ComputationClientError>;

/// Computation service contract.
#[async_trait]
pub trait ComputationClient: Send + Sync {
    /// Submits a run request.
    ///
    /// The call returns once the request has been handed over; the
    /// computation itself runs remotely.
    ///
    /// # Errors
    ///
    /// Returns [`ComputationClientError`] when the service rejects the
    /// request or cannot be reached.
    async fn run(&self, request: &ComputationRequest) -> ComputationClientResult<()>;
}

/// Errors returned by computation client implementations.
#[derive(Debug, Clone, Error)]
pub enum ComputationClientError {
    /// The service refused the request.
    #[error("computation request rejected: {0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("computation client transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComputationClientError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
