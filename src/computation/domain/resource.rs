//! Presigned file reference handed to the computation service.

use serde::{Deserialize, Serialize};

/// File name paired with a time-limited download URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileResource {
    filename: String,
    url: String,
}

impl FileResource {
    /// Creates a file resource.
    #[must_use]
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }

    /// Returns the file name.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the presigned URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
