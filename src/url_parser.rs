//! Folder reference parsing: extracting a Drive folder ID from a shared link.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{FilterError, Result};

/// `/folders/<ID>` path segment, anywhere in the link. Covers plain folder
/// links as well as the `/drive/u/0/folders/<ID>` account-scoped form.
static FOLDER_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/folders/([a-zA-Z0-9_-]+)").expect("Invalid folder segment regex")
});

/// `?id=<ID>` / `&id=<ID>` query parameter, e.g. `/open?id=<ID>`.
static ID_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").expect("Invalid id param regex"));

/// A bare folder ID. Real Drive IDs are well past ten characters; the floor
/// keeps short words from being mistaken for IDs.
static BARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{10,}$").expect("Invalid bare ID regex"));

/// Extract a Drive folder ID from a shared link or validate a raw ID.
///
/// Supports the following forms, first match wins:
/// - `https://drive.google.com/drive/folders/<ID>`
/// - `https://drive.google.com/drive/u/0/folders/<ID>`
/// - `https://drive.google.com/open?id=<ID>`
/// - a bare ID of at least ten characters
///
/// # Examples
///
/// ```
/// use filter_drive::url_parser::extract_folder_id;
///
/// let id = extract_folder_id("https://drive.google.com/drive/folders/1abc123XYZ").unwrap();
/// assert_eq!(id, "1abc123XYZ");
///
/// let id = extract_folder_id("1abc123XYZ").unwrap();
/// assert_eq!(id, "1abc123XYZ");
/// ```
pub fn extract_folder_id(link_or_id: &str) -> Result<String> {
    let trimmed = link_or_id.trim();

    if let Some(captures) = FOLDER_SEGMENT_REGEX.captures(trimmed) {
        if let Some(id) = captures.get(1) {
            return Ok(id.as_str().to_string());
        }
    }

    if let Some(captures) = ID_PARAM_REGEX.captures(trimmed) {
        if let Some(id) = captures.get(1) {
            return Ok(id.as_str().to_string());
        }
    }

    if BARE_ID_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    Err(FilterError::InvalidFolderRef(link_or_id.to_string()))
}

/// Public link for a folder, suitable for sharing once the folder has an
/// anyone-with-the-link permission.
pub fn folder_link(folder_id: &str) -> String {
    format!("https://drive.google.com/drive/folders/{}", folder_id)
}
