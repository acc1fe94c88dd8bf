//! Google Drive API client for fetching file metadata and contents.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::auth::Authenticator;
use crate::error::{DriveError, Result};
use crate::models::{ApiErrorResponse, FileMetadata};

/// Base URL for Google Drive API v3.
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// The two capabilities the fetcher needs from the remote store: the display
/// metadata of a file, and its bytes.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Get file metadata (name, size) by ID.
    async fn file_metadata(&self, file_id: &str) -> Result<FileMetadata>;

    /// Download the complete file contents into memory.
    ///
    /// Deck files are a few kilobytes of card IDs, so the whole body is
    /// buffered and returned as a value; persisting it is the caller's job.
    async fn download(&self, file_id: &str) -> Result<Vec<u8>>;
}

/// Client for the Google Drive v3 API.
pub struct DriveClient {
    auth: Authenticator,
    http: Client,
}

impl DriveClient {
    /// Create a new DriveClient.
    ///
    /// # Arguments
    /// * `auth` - Authenticator for obtaining access tokens
    pub fn new(auth: Authenticator) -> Self {
        Self {
            auth,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl RemoteStore for DriveClient {
    async fn file_metadata(&self, file_id: &str) -> Result<FileMetadata> {
        let token = self.auth.get_access_token().await?;

        let response = self
            .http
            .get(format!("{}/files/{}", DRIVE_API_BASE, file_id))
            .bearer_auth(&token)
            .query(&[
                ("supportsAllDrives", "true"),
                ("fields", "id, name, size, mimeType"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
                return Err(DriveError::ApiError {
                    status: api_error.error.code,
                    message: api_error.error.message,
                });
            }
            return Err(DriveError::ApiError {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let metadata: FileMetadata = response.json().await?;
        Ok(metadata)
    }

    async fn download(&self, file_id: &str) -> Result<Vec<u8>> {
        let token = self.auth.get_access_token().await?;

        let response = self
            .http
            .get(format!("{}/files/{}", DRIVE_API_BASE, file_id))
            .bearer_auth(&token)
            .query(&[("alt", "media"), ("supportsAllDrives", "true")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
                return Err(DriveError::ApiError {
                    status: api_error.error.code,
                    message: api_error.error.message,
                });
            }
            return Err(DriveError::ApiError {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let mut buffer = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buffer.extend_from_slice(&chunk);
        }

        debug!(file_id, bytes = buffer.len(), "download complete");
        Ok(buffer)
    }
}
