//! Media descriptor and upload result types.

use serde::{Deserialize, Serialize};

/// One piece of media to upload.
///
/// Descriptors are read once from the manifest and never mutated. The
/// `url` manifest field names the remote location the asset is fetched
/// from, so it deserializes into [`source_url`](Self::source_url).
///
/// # Examples
///
/// ```
/// use caravel_core::MediaDescriptor;
///
/// let descriptor: MediaDescriptor = serde_json::from_str(
///     r#"{
///         "id": "17d7655d-722d-492b-b25a-212a50fee0c2",
///         "url": "https://images.example.com/ferrari.jpg",
///         "title": "Ferrari",
///         "description": "Tinted"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(descriptor.title, "Ferrari");
/// assert!(descriptor.source_url.starts_with("https://"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Opaque stable identifier, reused as the remote public id
    pub id: String,
    /// Remote location the asset is fetched from
    #[serde(rename = "url")]
    pub source_url: String,
    /// Display caption
    pub title: String,
    /// Alt text, may be empty
    #[serde(default)]
    pub description: String,
}

/// A successfully uploaded asset.
///
/// Identical to the originating descriptor except that `url` now names
/// the remote-assigned stored location instead of the source.
///
/// # Examples
///
/// ```
/// use caravel_core::UploadResult;
///
/// let result = UploadResult {
///     id: "abc".to_string(),
///     url: "https://res.example.com/stored/abc.jpg".to_string(),
///     title: "Ferrari".to_string(),
///     description: String::new(),
/// };
///
/// assert_eq!(result.id, "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Identifier copied from the descriptor
    pub id: String,
    /// Final stored location assigned by the remote store
    pub url: String,
    /// Display caption copied from the descriptor
    pub title: String,
    /// Alt text copied from the descriptor
    pub description: String,
}
