//! The filter pipeline: resolve input, enumerate, match, materialize, report.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::{FilterError, Result};
use crate::listing::collect_entries;
use crate::matching::{self, MatchIndex, MatchedItem};
use crate::provider::DriveOps;
use crate::url_parser::{extract_folder_id, folder_link};
use crate::wanted::{parse_wanted_list, MatchStrategy};

/// Upper bound on a sanitized destination folder name, in characters.
const MAX_FOLDER_NAME_LEN: usize = 100;

/// Characters stripped from caller-supplied job names.
const ILLEGAL_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// One filter run's input.
#[derive(Debug, Clone)]
pub struct FilterRequest {
    /// Source folder link or bare ID.
    pub folder_ref: String,
    /// Free-form wanted-list text (newline/comma/semicolon separated).
    pub list_text: String,
    /// Optional name for the destination folder; sanitized before use and
    /// replaced by a timestamped default when absent or unusable.
    pub job_name: Option<String>,
    /// Key derivation applied to both entry names and wanted codes.
    pub strategy: MatchStrategy,
}

/// Terminal, immutable summary of a completed run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    /// Public link to the destination folder.
    pub result_link: String,
    /// Id of the destination folder.
    pub folder_id: String,
    /// Resolved destination folder name.
    pub folder_name: String,
    pub matched: Vec<MatchedItem>,
    pub unmatched: Vec<String>,
    /// Direct-entry count of the source folder, across all listing pages.
    pub total_source_entries: usize,
}

/// Run the whole matching-and-materialization pipeline against one folder.
///
/// Input problems (unresolvable folder reference, wanted list empty after
/// normalization) fail before any provider call. Once provider calls begin,
/// the first failure aborts the run: the destination folder and any entries
/// already copied into it remain in place — there is no rollback, and the
/// same applies when the surrounding task is cancelled mid-run. Copies are
/// issued sequentially in wanted order; an entry matched under two labels is
/// copied once per occurrence. The public-read grant is issued exactly once,
/// after the copy loop, even when nothing matched.
pub async fn run_filter<P>(ops: &P, request: &FilterRequest) -> Result<FilterReport>
where
    P: DriveOps + ?Sized,
{
    let source_id = extract_folder_id(&request.folder_ref)?;
    let wanted = parse_wanted_list(&request.list_text, request.strategy);
    if wanted.is_empty() {
        return Err(FilterError::EmptyWantedList);
    }

    let entries = collect_entries(ops, &source_id).await?;
    let total_source_entries = entries.len();
    debug!(
        "enumerated {} entries in folder {}",
        total_source_entries, source_id
    );

    let index = MatchIndex::build(&entries, request.strategy);
    let outcome = matching::resolve(&index, &wanted);
    info!(
        "matched {} of {} wanted items ({} entries to copy)",
        outcome.matched.len(),
        wanted.len(),
        outcome.copy_count()
    );

    let folder_name = resolve_folder_name(request.job_name.as_deref());
    let folder_id = ops.create_folder(&source_id, &folder_name).await?;
    info!("created destination folder '{}' ({})", folder_name, folder_id);

    for item in &outcome.matched {
        for entry in &item.entries {
            let copy_id = ops.copy_entry(&entry.id, &folder_id, &entry.name).await?;
            debug!("copied '{}' -> {}", entry.name, copy_id);
        }
    }

    ops.share_public(&folder_id).await?;
    info!("granted public read on {}", folder_id);

    Ok(FilterReport {
        result_link: folder_link(&folder_id),
        folder_id,
        folder_name,
        matched: outcome.matched,
        unmatched: outcome.unmatched,
        total_source_entries,
    })
}

/// Destination folder name: the sanitized job name, or a timestamped default.
fn resolve_folder_name(job_name: Option<&str>) -> String {
    job_name
        .and_then(sanitize_job_name)
        .unwrap_or_else(default_folder_name)
}

/// Strip characters Drive surfaces reject, collapse whitespace runs and cap
/// the length. `None` when nothing usable is left.
fn sanitize_job_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && !ILLEGAL_NAME_CHARS.contains(c))
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.chars().take(MAX_FOLDER_NAME_LEN).collect())
    }
}

/// `Filtered_<UTC timestamp>` with characters Drive links mangle replaced.
fn default_folder_name() -> String {
    let now = OffsetDateTime::now_utc();
    let stamp = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    format!("Filtered_{}", stamp.replace([':', '.'], "-"))
}
