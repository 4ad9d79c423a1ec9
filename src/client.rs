//! Google Drive API bindings for the filter pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::auth::Authenticator;
use crate::error::{FilterError, ProviderOp, Result};
use crate::models::{ApiErrorResponse, CreatedEntry, EntryPage};
use crate::provider::DriveOps;

/// Base URL for Google Drive API v3.
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Folder mime type in Drive.
const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Entries requested per listing page.
const PAGE_SIZE: &str = "1000";

/// Per-request bounds so no provider call can hang a run indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Drive v3 client; the production implementation of [`DriveOps`].
pub struct DriveClient {
    auth: Authenticator,
    http: Client,
    base_url: String,
}

impl DriveClient {
    /// Create a new DriveClient against the public Drive API.
    ///
    /// # Arguments
    /// * `auth` - Authenticator for obtaining access tokens
    pub fn new(auth: Authenticator) -> Self {
        Self::with_base_url(auth, DRIVE_API_BASE)
    }

    /// Client against a non-default endpoint. Test suites point this at a
    /// local mock server.
    pub fn with_base_url(auth: Authenticator, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            auth,
            http,
            base_url: base_url.into(),
        }
    }

    /// Map a non-2xx response into an API error, decoding the Drive error
    /// envelope when the body carries one.
    async fn api_error(op: ProviderOp, response: Response) -> FilterError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
            FilterError::Api {
                op,
                status: api_error.error.code,
                message: api_error.error.message,
            }
        } else {
            FilterError::Api {
                op,
                status: status.as_u16(),
                message: body,
            }
        }
    }

    async fn parse_checked<T: DeserializeOwned>(op: ProviderOp, response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::api_error(op, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|source| FilterError::Transport { op, source })
    }
}

#[async_trait]
impl DriveOps for DriveClient {
    async fn list_children(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> Result<EntryPage> {
        let op = ProviderOp::ListChildren;
        let token = self.auth.access_token().await?;
        let query = format!("'{}' in parents and trashed = false", folder_id);

        let mut request = self
            .http
            .get(format!("{}/files", self.base_url))
            .bearer_auth(&token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "nextPageToken, files(id, name, mimeType, thumbnailLink)"),
                ("pageSize", PAGE_SIZE),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ]);

        if let Some(page_token) = page_token {
            request = request.query(&[("pageToken", page_token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FilterError::Transport { op, source })?;

        Self::parse_checked(op, response).await
    }

    async fn create_folder(&self, parent_id: &str, name: &str) -> Result<String> {
        let op = ProviderOp::CreateFolder;
        let token = self.auth.access_token().await?;

        let body = serde_json::json!({
            "name": name,
            "mimeType": FOLDER_MIME_TYPE,
            "parents": [parent_id]
        });

        let response = self
            .http
            .post(format!("{}/files", self.base_url))
            .bearer_auth(&token)
            .query(&[("supportsAllDrives", "true"), ("fields", "id")])
            .json(&body)
            .send()
            .await
            .map_err(|source| FilterError::Transport { op, source })?;

        let created: CreatedEntry = Self::parse_checked(op, response).await?;
        Ok(created.id)
    }

    async fn copy_entry(
        &self,
        entry_id: &str,
        dest_folder_id: &str,
        name: &str,
    ) -> Result<String> {
        let op = ProviderOp::CopyEntry;
        let token = self.auth.access_token().await?;

        let body = serde_json::json!({
            "name": name,
            "parents": [dest_folder_id]
        });

        let response = self
            .http
            .post(format!("{}/files/{}/copy", self.base_url, entry_id))
            .bearer_auth(&token)
            .query(&[("supportsAllDrives", "true"), ("fields", "id")])
            .json(&body)
            .send()
            .await
            .map_err(|source| FilterError::Transport { op, source })?;

        let created: CreatedEntry = Self::parse_checked(op, response).await?;
        Ok(created.id)
    }

    async fn share_public(&self, folder_id: &str) -> Result<()> {
        let op = ProviderOp::SharePublic;
        let token = self.auth.access_token().await?;

        let body = serde_json::json!({
            "role": "reader",
            "type": "anyone"
        });

        let response = self
            .http
            .post(format!("{}/files/{}/permissions", self.base_url, folder_id))
            .bearer_auth(&token)
            .query(&[("supportsAllDrives", "true")])
            .json(&body)
            .send()
            .await
            .map_err(|source| FilterError::Transport { op, source })?;

        if !response.status().is_success() {
            return Err(Self::api_error(op, response).await);
        }
        Ok(())
    }
}
