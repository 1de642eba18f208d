//! Storage port for presigned download URLs.

use std::sync::Arc;
use thiserror::Error;

/// Result type for presigned URL generation.
pub type PresignedUrlResult<T> = Result<T, PresignedUrlError>;

/// Object storage contract for sharing files with the computation service.
pub trait PresignedUrlProvider: Send + Sync {
    /// Returns a URL granting read access to the object at `path` for
    /// `expiry_hours` hours.
    ///
    /// `path` is the full storage path, bucket included, as published by
    /// the task orchestrator.
    ///
    /// # Errors
    ///
    /// Returns [`PresignedUrlError`] when the object cannot be signed.
    fn presigned_url(&self, path: &str, expiry_hours: u32) -> PresignedUrlResult<String>;
}

/// Errors returned by presigned URL providers.
#[derive(Debug, Clone, Error)]
pub enum PresignedUrlError {
    /// No object exists at the path.
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// Storage backend failure.
    #[error("object storage error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PresignedUrlError {
    /// Wraps a storage backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
