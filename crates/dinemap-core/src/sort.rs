use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::record::Record;
use crate::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by name, accent- and case-folded.
    #[default]
    Name,
    /// Descending by rating; absent ratings sort as `0`.
    Rating,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "rating" => Ok(SortKey::Rating),
            other => Err(CoreError::UnknownSortKey(other.to_owned())),
        }
    }
}

/// Orders already-filtered records by `key`.
///
/// Ties under [`SortKey::Rating`] carry no ordering guarantee.
#[must_use]
pub fn apply_sort(mut records: Vec<&Record>, key: SortKey) -> Vec<&Record> {
    match key {
        SortKey::Name => records.sort_by_cached_key(|r| name_key(&r.name)),
        SortKey::Rating => {
            records.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
        }
    }
    records
}

/// Locale-style name comparison.
///
/// Base letters decide first, then accents (unaccented before accented), then
/// case (lowercase before uppercase). Raw names break any remaining tie.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a).cmp(&name_key(b))
}

/// `(base letters, letters with accents, uppercase positions, raw name)`.
type NameKey = (String, String, Vec<bool>, String);

fn name_key(name: &str) -> NameKey {
    let decomposed: Vec<char> = name.nfkd().collect();
    let base = decomposed
        .iter()
        .filter(|c| !is_combining_mark(**c))
        .flat_map(|c| c.to_lowercase())
        .collect();
    let accented = decomposed.iter().flat_map(|c| c.to_lowercase()).collect();
    let case = decomposed.iter().map(|c| c.is_uppercase()).collect();
    (base, accented, case, name.to_owned())
}
