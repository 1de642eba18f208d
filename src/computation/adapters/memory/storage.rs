//! Presigned URL provider backed by a fixed path table.

use std::collections::HashMap;

use crate::computation::ports::{PresignedUrlError, PresignedUrlProvider, PresignedUrlResult};

/// Provider answering from a fixed table of storage paths to URLs.
///
/// URLs are served as registered; the requested expiry is not applied.
#[derive(Debug, Clone, Default)]
pub struct StaticUrlProvider {
    urls: HashMap<String, String>,
}

impl StaticUrlProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the URL served for `path`.
    #[must_use]
    pub fn with_url(mut self, path: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.insert(path.into(), url.into());
        self
    }
}

impl PresignedUrlProvider for StaticUrlProvider {
    fn presigned_url(&self, path: &str, _expiry_hours: u32) -> PresignedUrlResult<String> {
        self.urls
            .get(path)
            .cloned()
            .ok_or_else(|| PresignedUrlError::ObjectNotFound(path.to_owned()))
    }
}
