//! Capability contract between the filter pipeline and the storage provider.
//!
//! The pipeline is written against this trait only; the production
//! implementation is [`crate::client::DriveClient`] and the test suite
//! substitutes in-memory stubs. The handle is always passed in explicitly —
//! there is no process-global credential state.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::EntryPage;

/// The four provider calls the pipeline consumes. All of them must work in
/// shared-drive contexts, and none may block past the client's timeouts.
#[async_trait]
pub trait DriveOps: Send + Sync {
    /// One page of the direct, non-trashed children of `folder_id`.
    ///
    /// `page_token` is the opaque cursor from the previous page, `None` for
    /// the first page. The returned page carries the cursor for the next
    /// page, `None` when the listing is exhausted.
    async fn list_children(&self, folder_id: &str, page_token: Option<&str>)
        -> Result<EntryPage>;

    /// Create a folder named `name` under `parent_id`; returns its id.
    async fn create_folder(&self, parent_id: &str, name: &str) -> Result<String>;

    /// Duplicate `entry_id` into `dest_folder_id` under the display name
    /// `name`; returns the id of the copy.
    async fn copy_entry(&self, entry_id: &str, dest_folder_id: &str, name: &str)
        -> Result<String>;

    /// Grant anyone-with-the-link read access on `folder_id`.
    async fn share_public(&self, folder_id: &str) -> Result<()>;
}
