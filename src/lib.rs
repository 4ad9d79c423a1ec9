//! filter_drive - copy name-matched files out of a Google Drive folder into
//! a new publicly shared subfolder.
//!
//! Given a shared folder link and a free-form list of wanted codes or file
//! names, the pipeline:
//! - resolves the link to a folder ID,
//! - enumerates every direct entry across all listing pages,
//! - matches entries against the wanted list under a configurable
//!   normalization strategy (extension-insensitive codes or exact names),
//! - copies the matches into a freshly created subfolder,
//! - shares that subfolder with anyone holding the link,
//!
//! and reports what matched, what didn't, and where the copies live.
//!
//! # Example
//!
//! ```no_run
//! use filter_drive::{run_filter, Authenticator, DriveClient, FilterRequest, MatchStrategy};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let auth = Authenticator::from_file("service-account.json")?;
//!     let client = DriveClient::new(auth);
//!
//!     let request = FilterRequest {
//!         folder_ref: "https://drive.google.com/drive/folders/1abc123XYZ".to_string(),
//!         list_text: "38UT\n52AB, 07XY".to_string(),
//!         job_name: Some("Album picks".to_string()),
//!         strategy: MatchStrategy::Code,
//!     };
//!
//!     let report = run_filter(&client, &request).await?;
//!     println!(
//!         "{}: {} matched, {} not found",
//!         report.result_link,
//!         report.matched.len(),
//!         report.unmatched.len()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod listing;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod url_parser;
pub mod wanted;

// Re-exports for convenience
pub use auth::Authenticator;
pub use client::DriveClient;
pub use error::{ErrorKind, FilterError, ProviderOp, Result};
pub use listing::collect_entries;
pub use matching::{MatchIndex, MatchOutcome, MatchedItem};
pub use models::{DriveEntry, EntryPage};
pub use pipeline::{run_filter, FilterReport, FilterRequest};
pub use provider::DriveOps;
pub use url_parser::extract_folder_id;
pub use wanted::{parse_wanted_list, MatchStrategy, WantedItem};
