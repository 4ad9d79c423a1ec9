//! Match engine: a key index over folder entries, resolved against the
//! wanted list.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::DriveEntry;
use crate::wanted::{MatchStrategy, WantedItem};

/// Mime-type prefix shared by Drive-native formats (documents, sheets,
/// folders, shortcuts). Such entries cannot be materialized by a byte copy
/// and are filtered out even when their name matches.
pub const GOOGLE_NATIVE_PREFIX: &str = "application/vnd.google-apps";

/// Whether a mime type names a Drive-native, non-duplicable format.
pub fn is_native_mime(mime_type: &str) -> bool {
    mime_type.starts_with(GOOGLE_NATIVE_PREFIX)
}

/// Index from normalized key to the source entries carrying that key.
///
/// One key can own several entries (`A1.jpg` and `a1.png` both index under
/// `A1` with the code strategy); within a group, enumeration order is kept.
/// Built once per run and never mutated afterwards.
pub struct MatchIndex {
    groups: HashMap<String, Vec<DriveEntry>>,
}

impl MatchIndex {
    pub fn build(entries: &[DriveEntry], strategy: MatchStrategy) -> Self {
        let mut groups: HashMap<String, Vec<DriveEntry>> = HashMap::new();
        for entry in entries {
            groups
                .entry(strategy.key(&entry.name))
                .or_default()
                .push(entry.clone());
        }
        Self { groups }
    }

    pub fn lookup(&self, key: &str) -> Option<&[DriveEntry]> {
        self.groups.get(key).map(Vec::as_slice)
    }
}

/// One wanted label that resolved to at least one duplicable entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedItem {
    pub raw_label: String,
    pub entries: Vec<DriveEntry>,
}

/// Partition of the wanted list. Every wanted item lands in exactly one of
/// the two sides, in input order.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub matched: Vec<MatchedItem>,
    pub unmatched: Vec<String>,
}

impl MatchOutcome {
    /// Total number of entries to duplicate, counting one per occurrence.
    pub fn copy_count(&self) -> usize {
        self.matched.iter().map(|item| item.entries.len()).sum()
    }
}

/// Resolve each wanted item against the index, in input order.
///
/// A key miss sends the label to `unmatched`. On a hit, Drive-native entries
/// are filtered out of the group; when that leaves nothing the label is
/// demoted to `unmatched` as well. Two labels collapsing to the same key both
/// receive the same entries.
pub fn resolve(index: &MatchIndex, wanted: &[WantedItem]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for item in wanted {
        let Some(group) = index.lookup(&item.key) else {
            outcome.unmatched.push(item.raw.clone());
            continue;
        };

        let entries: Vec<DriveEntry> = group
            .iter()
            .filter(|entry| !is_native_mime(&entry.mime_type))
            .cloned()
            .collect();

        if entries.is_empty() {
            outcome.unmatched.push(item.raw.clone());
        } else {
            outcome.matched.push(MatchedItem {
                raw_label: item.raw.clone(),
                entries,
            });
        }
    }

    outcome
}
