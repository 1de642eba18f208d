//! Adapter configuration.
//!
//! Configuration is a small JSON document. Every field is optional and falls
//! back to the values the task orchestrator deployment uses:
//!
//! ```json
//! {
//!   "url_expiry_hours": 1,
//!   "channels": {
//!     "manual": "consumeTask",
//!     "automatic": "consumeAutoTask"
//!   }
//! }
//! ```

use crate::computation::domain::TriggerOrigin;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lifetime of presigned input URLs.
pub const DEFAULT_URL_EXPIRY_HOURS: u32 = 1;

/// Default channel delivering operator-requested runs.
pub const DEFAULT_MANUAL_CHANNEL: &str = "consumeTask";

/// Default channel delivering orchestrator-started runs.
pub const DEFAULT_AUTOMATIC_CHANNEL: &str = "consumeAutoTask";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`AdapterConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Names of the two event bus subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelBindings {
    /// Channel delivering operator-requested runs.
    pub manual: String,
    /// Channel delivering orchestrator-started runs.
    pub automatic: String,
}

impl ChannelBindings {
    /// Resolves a channel name to the trigger origin it carries.
    ///
    /// Returns `None` for channels the adapter is not bound to.
    #[must_use]
    pub fn origin_for(&self, channel: &str) -> Option<TriggerOrigin> {
        if channel == self.manual {
            Some(TriggerOrigin::Manual)
        } else if channel == self.automatic {
            Some(TriggerOrigin::Automatic)
        } else {
            None
        }
    }

    /// Returns the channel name bound to `origin`.
    #[must_use]
    pub fn channel_for(&self, origin: TriggerOrigin) -> &str {
        match origin {
            TriggerOrigin::Manual => &self.manual,
            TriggerOrigin::Automatic => &self.automatic,
        }
    }
}

impl Default for ChannelBindings {
    fn default() -> Self {
        Self {
            manual: DEFAULT_MANUAL_CHANNEL.to_owned(),
            automatic: DEFAULT_AUTOMATIC_CHANNEL.to_owned(),
        }
    }
}

/// Runtime settings of the task event adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Lifetime, in hours, of the presigned URLs handed to the computation
    /// service.
    pub url_expiry_hours: u32,
    /// Event bus subscriptions.
    pub channels: ChannelBindings,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            url_expiry_hours: DEFAULT_URL_EXPIRY_HOURS,
            channels: ChannelBindings::default(),
        }
    }
}

impl AdapterConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and [`ConfigError::Invalid`] when validation fails.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`AdapterConfig::from_json_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_owned(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            ConfigError::Invalid(format!("configuration path {path} has no file name"))
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json_str(&contents)
    }

    /// Checks that the settings can drive the adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the URL expiry is zero or the
    /// channel names are blank or identical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url_expiry_hours == 0 {
            return Err(ConfigError::Invalid(
                "url_expiry_hours must be a positive number of hours".to_owned(),
            ));
        }
        let ChannelBindings { manual, automatic } = &self.channels;
        if manual.trim().is_empty() || automatic.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "channel names must not be empty".to_owned(),
            ));
        }
        if manual == automatic {
            return Err(ConfigError::Invalid(format!(
                "manual and automatic runs cannot share channel '{manual}'"
            )));
        }
        Ok(())
    }
}
