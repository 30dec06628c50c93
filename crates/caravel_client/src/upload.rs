//! Single-item uploader against the remote asset store.

use crate::{CloudConfig, generate_signature};
use caravel_core::{MediaDescriptor, UploadOutcome, UploadResult, Uploader};
use caravel_error::HttpError;
use reqwest::multipart::Form;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Injectable unix-timestamp provider, so signature tests are
/// deterministic.
pub type TimestampSource = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Response body of a successful upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Final stored location assigned by the remote store
    secure_url: String,
}

/// Client for a Cloudinary-style upload endpoint.
///
/// Each upload submits one signed multipart form carrying the source
/// URL as the file payload; the remote store fetches the asset itself.
/// Failures are absorbed into [`UploadOutcome::Failed`] and logged,
/// never raised, and no retry is attempted.
///
/// # Example
/// ```no_run
/// use caravel_client::{CloudConfig, CloudinaryClient};
/// use caravel_core::{MediaDescriptor, Uploader};
///
/// #[tokio::main]
/// async fn main() {
///     let config = CloudConfig::from_env().expect("credentials in environment");
///     let client = CloudinaryClient::new(config);
///
///     let descriptor = MediaDescriptor {
///         id: "42".to_string(),
///         source_url: "https://images.example.com/42.jpg".to_string(),
///         title: "Coupe".to_string(),
///         description: String::new(),
///     };
///
///     let outcome = client.upload(&descriptor).await;
///     println!("{:?}", outcome.as_uploaded());
/// }
/// ```
#[derive(Clone)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudConfig,
    timestamp_source: TimestampSource,
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("cloud_name", &self.config.cloud_name)
            .field("folder", &self.config.folder)
            .finish_non_exhaustive()
    }
}

impl CloudinaryClient {
    /// Creates a new client for the given upload target.
    pub fn new(config: CloudConfig) -> Self {
        debug!(cloud_name = %config.cloud_name, "Creating new upload client");
        Self {
            client: reqwest::Client::new(),
            config,
            timestamp_source: Arc::new(|| chrono::Utc::now().timestamp()),
        }
    }

    /// Replace the timestamp provider. Tests use this to pin the
    /// signed timestamp.
    pub fn with_timestamp_source(mut self, timestamp_source: TimestampSource) -> Self {
        self.timestamp_source = timestamp_source;
        self
    }

    /// The upload endpoint for this target.
    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.config.api_base, self.config.cloud_name
        )
    }

    /// Context metadata string attached to the stored asset.
    fn context_string(descriptor: &MediaDescriptor) -> String {
        format!(
            "alt={}|caption={}",
            descriptor.description, descriptor.title
        )
    }

    /// Sends one signed upload request.
    #[instrument(skip(self, descriptor), fields(id = %descriptor.id, title = %descriptor.title))]
    async fn try_upload(&self, descriptor: &MediaDescriptor) -> Result<UploadResult, HttpError> {
        let timestamp = (self.timestamp_source)().to_string();
        let context = Self::context_string(descriptor);

        // The api_key and file fields are transmitted but not signed.
        let signature = generate_signature(
            &[
                ("context", Some(context.as_str())),
                ("folder", Some(self.config.folder.as_str())),
                ("public_id", Some(descriptor.id.as_str())),
                ("timestamp", Some(timestamp.as_str())),
                ("upload_preset", Some(self.config.upload_preset.as_str())),
            ],
            &self.config.api_secret,
        );

        let form = Form::new()
            .text("file", descriptor.source_url.clone())
            .text("upload_preset", self.config.upload_preset.clone())
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("folder", self.config.folder.clone())
            .text("context", context)
            .text("public_id", descriptor.id.clone());

        debug!("Sending upload request");

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::new(format!(
                "Upload endpoint returned {}: {}",
                status, body
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| HttpError::new(format!("Failed to parse upload response: {}", e)))?;

        Ok(UploadResult {
            id: descriptor.id.clone(),
            url: body.secure_url,
            title: descriptor.title.clone(),
            description: descriptor.description.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Uploader for CloudinaryClient {
    async fn upload(&self, descriptor: &MediaDescriptor) -> UploadOutcome {
        match self.try_upload(descriptor).await {
            Ok(result) => {
                info!(title = %result.title, url = %result.url, "Uploaded");
                UploadOutcome::Uploaded(result)
            }
            Err(e) => {
                error!(title = %descriptor.title, error = %e, "Upload failed");
                UploadOutcome::Failed {
                    id: descriptor.id.clone(),
                    title: descriptor.title.clone(),
                    reason: e.message,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(description: &str) -> MediaDescriptor {
        MediaDescriptor {
            id: "42".to_string(),
            source_url: "https://images.example.com/42.jpg".to_string(),
            title: "Coupe".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn context_joins_alt_and_caption() {
        let context = CloudinaryClient::context_string(&descriptor("front quarter"));
        assert_eq!(context, "alt=front quarter|caption=Coupe");
    }

    #[test]
    fn context_keeps_empty_alt() {
        // An empty description still contributes the alt= prefix, so
        // the context field is never empty and always gets signed.
        let context = CloudinaryClient::context_string(&descriptor(""));
        assert_eq!(context, "alt=|caption=Coupe");
    }

    #[test]
    fn upload_url_embeds_base_and_cloud_name() {
        let config = CloudConfig::new("demo-cloud", "key", "secret", "preset", "folder")
            .with_api_base("http://127.0.0.1:9000");
        let client = CloudinaryClient::new(config);

        assert_eq!(
            client.upload_url(),
            "http://127.0.0.1:9000/v1_1/demo-cloud/image/upload"
        );
    }
}
