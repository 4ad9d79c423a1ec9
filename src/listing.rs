//! Folder enumeration: the provider's page-token protocol collapsed into one
//! completed sequence of entries.

use futures::{Stream, TryStreamExt};
use tracing::debug;

use crate::error::Result;
use crate::models::DriveEntry;
use crate::provider::DriveOps;

enum PageCursor {
    First,
    Next(String),
    Done,
}

/// Lazy, finite stream of listing pages for one folder.
///
/// The stream follows the provider's opaque continuation cursor until the
/// provider signals no more pages. It is not restartable; a page-fetch
/// failure ends the stream with that error and the enumeration must be
/// considered void — no partial results are exposed.
pub fn entry_pages<'a, P>(
    ops: &'a P,
    folder_id: &'a str,
) -> impl Stream<Item = Result<Vec<DriveEntry>>> + 'a
where
    P: DriveOps + ?Sized,
{
    futures::stream::try_unfold(PageCursor::First, move |cursor| async move {
        let page_token = match &cursor {
            PageCursor::First => None,
            PageCursor::Next(token) => Some(token.as_str()),
            PageCursor::Done => return Ok(None),
        };

        let page = ops.list_children(folder_id, page_token).await?;
        debug!("listing page fetched: {} entries", page.entries.len());

        let next = match page.next_page_token {
            Some(token) => PageCursor::Next(token),
            None => PageCursor::Done,
        };
        Ok(Some((page.entries, next)))
    })
}

/// Exhaustively list the direct children of `folder_id`.
///
/// Accumulates every page into one in-memory sequence before returning — a
/// deliberate simplification over streaming, acceptable because folder sizes
/// are bounded by the provider's page size times a small page count in the
/// target use case.
pub async fn collect_entries<P>(ops: &P, folder_id: &str) -> Result<Vec<DriveEntry>>
where
    P: DriveOps + ?Sized,
{
    entry_pages(ops, folder_id)
        .try_fold(Vec::new(), |mut all, page| async move {
            all.extend(page);
            Ok(all)
        })
        .await
}
