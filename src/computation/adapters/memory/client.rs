//! Computation client that records submitted requests.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::computation::{
    domain::ComputationRequest,
    ports::{ComputationClient, ComputationClientError, ComputationClientResult},
};

/// Thread-safe client keeping every request it receives.
///
/// A client built with [`RecordingComputationClient::rejecting`] refuses
/// every request instead, without recording it.
#[derive(Debug, Clone, Default)]
pub struct RecordingComputationClient {
    requests: Arc<RwLock<Vec<ComputationRequest>>>,
    rejection: Option<String>,
}

impl RecordingComputationClient {
    /// Creates a client that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that rejects every request with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            requests: Arc::default(),
            rejection: Some(reason.into()),
        }
    }

    /// Returns the accepted requests in submission order.
    #[must_use]
    pub fn requests(&self) -> Vec<ComputationRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ComputationClient for RecordingComputationClient {
    async fn run(&self, request: &ComputationRequest) -> ComputationClientResult<()> {
        if let Some(reason) = &self.rejection {
            return Err(ComputationClientError::Rejected(reason.clone()));
        }
        let mut requests = self.requests.write().map_err(|err| {
            ComputationClientError::transport(std::io::Error::other(err.to_string()))
        })?;
        requests.push(request.clone());
        Ok(())
    }
}
