//! Manifest loading.
//!
//! The manifest is an ordered JSON array of media descriptors. Loading
//! follows a precedence system:
//! - An explicitly supplied path always wins
//! - Otherwise `./manifest.json` in the current directory
//! - Otherwise the bundled sample manifest (include_str! from
//!   manifest.json at the workspace root)

use crate::MediaDescriptor;
use caravel_error::{CaravelResult, IoError, JsonError};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled sample manifest, used when no user manifest is found.
const DEFAULT_MANIFEST: &str = include_str!("../../../manifest.json");

/// An ordered list of media descriptors to upload.
///
/// # Examples
///
/// ```
/// use caravel_core::Manifest;
///
/// let manifest = Manifest::from_json_str(
///     r#"[{"id": "a", "url": "https://images.example.com/a.jpg", "title": "A"}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(manifest.len(), 1);
/// assert_eq!(manifest.descriptors()[0].id, "a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    descriptors: Vec<MediaDescriptor>,
}

impl Manifest {
    /// Parse a manifest from a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a JSON array of
    /// descriptor records.
    pub fn from_json_str(json: &str) -> CaravelResult<Self> {
        let descriptors: Vec<MediaDescriptor> = serde_json::from_str(json)
            .map_err(|e| JsonError::new(format!("Failed to parse manifest: {}", e)))?;
        Ok(Self { descriptors })
    }

    /// Load a manifest from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CaravelResult<Self> {
        debug!("Loading manifest from file");

        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IoError::new(format!(
                "Failed to read manifest from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Load a manifest with precedence: explicit path > current
    /// directory > bundled sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected source cannot be read or
    /// parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use caravel_core::Manifest;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let manifest = Manifest::load(None)?;
    /// println!("{} descriptors queued", manifest.len());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> CaravelResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let local = Path::new("manifest.json");
        if local.exists() {
            debug!("Loading manifest from current directory");
            return Self::from_file(local);
        }

        debug!("No user manifest found, using bundled sample");
        Self::from_json_str(DEFAULT_MANIFEST)
    }

    /// The descriptors, in manifest order.
    pub fn descriptors(&self) -> &[MediaDescriptor] {
        &self.descriptors
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Consume the manifest, yielding the descriptor list.
    pub fn into_descriptors(self) -> Vec<MediaDescriptor> {
        self.descriptors
    }
}

impl From<Vec<MediaDescriptor>> for Manifest {
    fn from(descriptors: Vec<MediaDescriptor>) -> Self {
        Self { descriptors }
    }
}
