//! Data models for Google Drive API responses.

use serde::{Deserialize, Serialize};

/// One direct child of the source folder, as reported by the listing call.
///
/// Identity is the Drive-assigned `id`; the struct is immutable for the
/// duration of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
}

impl std::fmt::Display for DriveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mime = if self.mime_type.is_empty() {
            "-"
        } else {
            &self.mime_type
        };
        write!(f, "{}\t{}\t{}", self.id, mime, self.name)
    }
}

/// One page of a folder listing: the entries plus the opaque cursor for the
/// next page, `None` when the provider has no more pages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPage {
    #[serde(default, rename = "files")]
    pub entries: Vec<DriveEntry>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Response from files.create and files.copy with `fields=id`.
#[derive(Debug, Deserialize)]
pub struct CreatedEntry {
    pub id: String,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Service account credentials from JSON file.
#[derive(Debug, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: Option<String>,
}

/// OAuth2 token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_entry_deserialize() {
        let json = r#"{
            "id": "abc123",
            "name": "38UT.CR2",
            "mimeType": "image/x-canon-cr2",
            "thumbnailLink": "https://lh3.googleusercontent.com/abc123"
        }"#;

        let entry: DriveEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.name, "38UT.CR2");
        assert_eq!(entry.mime_type, "image/x-canon-cr2");
        assert_eq!(
            entry.thumbnail_link.as_deref(),
            Some("https://lh3.googleusercontent.com/abc123")
        );
    }

    #[test]
    fn test_drive_entry_minimal_fields() {
        let json = r#"{"id": "f1", "name": "IMG_0001.jpg"}"#;

        let entry: DriveEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "f1");
        assert_eq!(entry.mime_type, "");
        assert!(entry.thumbnail_link.is_none());
    }

    #[test]
    fn test_entry_page_deserialize() {
        let json = r#"{
            "files": [
                {"id": "f1", "name": "a.jpg", "mimeType": "image/jpeg"},
                {"id": "f2", "name": "b.jpg", "mimeType": "image/jpeg"}
            ],
            "nextPageToken": "token123"
        }"#;

        let page: EntryPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("token123"));
    }

    #[test]
    fn test_entry_page_last_page() {
        let json = r#"{"files": []}"#;

        let page: EntryPage = serde_json::from_str(json).unwrap();
        assert!(page.entries.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_api_error_deserialize() {
        let json = r#"{"error": {"code": 404, "message": "File not found: xyz"}}"#;

        let resp: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error.code, 404);
        assert_eq!(resp.error.message, "File not found: xyz");
    }

    #[test]
    fn test_drive_entry_display() {
        let entry = DriveEntry {
            id: "abc123".to_string(),
            name: "38UT.CR2".to_string(),
            mime_type: "image/x-canon-cr2".to_string(),
            thumbnail_link: None,
        };

        let display = format!("{}", entry);
        assert!(display.contains("abc123"));
        assert!(display.contains("38UT.CR2"));
        assert!(display.contains("image/x-canon-cr2"));
    }
}
