//! Wanted-list parsing and the name normalization strategies.

use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

/// How entry names and wanted codes are reduced to comparable keys.
///
/// The strategy is chosen per run and applied uniformly to both sides of the
/// match. `Code` is the superset behavior: it matches codes against file
/// names regardless of extension, width or case. `Exact` only matches full
/// file names, differing by case at most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Extension-stripped, NFKC-folded, ASCII-alphanumeric, upper-cased code.
    #[default]
    Code,
    /// Whole token lower-cased; no extension stripping.
    Exact,
}

impl MatchStrategy {
    /// Normalized key for one raw name or wanted code.
    ///
    /// Pure function of its input, and idempotent: `key(key(x)) == key(x)`.
    pub fn key(&self, raw: &str) -> String {
        match self {
            MatchStrategy::Exact => raw.to_lowercase(),
            MatchStrategy::Code => canonical_code(raw),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(MatchStrategy::Code),
            "exact" => Ok(MatchStrategy::Exact),
            other => Err(format!(
                "unknown match strategy '{}' (expected 'code' or 'exact')",
                other
            )),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Code => f.write_str("code"),
            MatchStrategy::Exact => f.write_str("exact"),
        }
    }
}

/// `"38UT.CR2"` and `"  38ut  "` both canonicalize to `"38UT"`.
fn canonical_code(raw: &str) -> String {
    strip_extension(raw)
        .nfkc()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Drop one trailing `.ext` suffix. A dot in first position marks a hidden
/// file, not an extension separator.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// One wanted token exactly as the user typed it, plus its match key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WantedItem {
    pub raw: String,
    pub key: String,
}

/// Split free-form user text into wanted items.
///
/// Tokens are separated by newlines, commas or semicolons; surrounding
/// whitespace is trimmed and empty tokens dropped. First-seen order is kept
/// and duplicate labels are NOT collapsed — the report echoes every token the
/// user typed. Key collisions across labels are expected; resolving them is
/// the match engine's job.
pub fn parse_wanted_list(input: &str, strategy: MatchStrategy) -> Vec<WantedItem> {
    input
        .split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| WantedItem {
            raw: token.to_string(),
            key: strategy.key(token),
        })
        .collect()
}
