//! Upload target configuration.
//!
//! Credentials are never baked into the source: they arrive through an
//! explicitly constructed [`CloudConfig`], read from environment
//! variables or from a TOML file. The explicit struct keeps hidden
//! global state out of the client and lets tests supply doubles.

use caravel_error::{CaravelResult, ConfigError};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Credentials and destination for the remote asset store.
///
/// # Examples
///
/// ```
/// use caravel_client::CloudConfig;
///
/// let config = CloudConfig::new(
///     "demo-cloud",
///     "123456789",
///     "top-secret",
///     "unsigned-uploads",
///     "showroom",
/// );
///
/// assert_eq!(config.cloud_name, "demo-cloud");
/// assert!(config.api_base.starts_with("https://"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CloudConfig {
    /// Cloud (account) name, part of the upload URL
    pub cloud_name: String,
    /// Public API key, sent with every request
    pub api_key: String,
    /// API secret used only to compute signatures, never transmitted
    pub api_secret: String,
    /// Upload preset token registered with the remote store
    pub upload_preset: String,
    /// Destination folder for every uploaded asset
    pub folder: String,
    /// API base URL; overridable so tests can point at a local server
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl CloudConfig {
    /// Create a configuration with the default API base.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        upload_preset: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            upload_preset: upload_preset.into(),
            folder: folder.into(),
            api_base: default_api_base(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `CARAVEL_CLOUD_NAME`, `CARAVEL_API_KEY`,
    /// `CARAVEL_API_SECRET`, `CARAVEL_UPLOAD_PRESET` and
    /// `CARAVEL_FOLDER`. Call `dotenvy::dotenv()` first if the values
    /// live in a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    #[instrument]
    pub fn from_env() -> CaravelResult<Self> {
        debug!("Loading upload target configuration from environment");

        let require = |name: &str| {
            std::env::var(name)
                .map_err(|_| ConfigError::new(format!("{} is not set", name)))
        };

        Ok(Self {
            cloud_name: require("CARAVEL_CLOUD_NAME")?,
            api_key: require("CARAVEL_API_KEY")?,
            api_secret: require("CARAVEL_API_SECRET")?,
            upload_preset: require("CARAVEL_UPLOAD_PRESET")?,
            folder: require("CARAVEL_FOLDER")?,
            api_base: std::env::var("CARAVEL_API_BASE").unwrap_or_else(|_| default_api_base()),
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CaravelResult<Self> {
        debug!("Loading upload target configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                caravel_error::CaravelError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                caravel_error::CaravelError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
