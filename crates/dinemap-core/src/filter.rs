//! Multi-facet filtering over an in-memory record collection.
//!
//! Every evaluation runs against the full source collection; there is no
//! incremental index. A record passes when the text predicate and all eight
//! facet predicates hold.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::facets::{Facet, DATE_SPOT_NO, DATE_SPOT_YES, SENTINEL};
use crate::record::Record;

/// Plain-value filter state owned by the UI layer.
///
/// Facets not present in `selections` are at the sentinel. Setting a facet to
/// the sentinel removes its entry, so `selections` only ever holds active
/// constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search: String,
    selections: BTreeMap<Facet, String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`FilterState::set`].
    #[must_use]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        if value == SENTINEL {
            self.selections.remove(&facet);
        } else {
            self.selections.insert(facet, value);
        }
    }

    /// Current selection for `facet`, `"all"` when unconstrained.
    #[must_use]
    pub fn selection(&self, facet: Facet) -> &str {
        self.selections.get(&facet).map_or(SENTINEL, String::as_str)
    }

    /// Resets every facet to the sentinel. The search text is kept.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Number of facets away from the sentinel. Search text is not counted.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.selections.len()
    }
}

/// Returns the records of `records` that satisfy `state`, in input order.
///
/// Accepts any iterator of borrowed records so the output can be fed back in.
pub fn apply_filters<'a, I>(records: I, state: &FilterState) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = state.search.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_text(r, &needle) && matches_facets(r, state))
        .collect()
}

/// Per-record predicate behind [`apply_filters`].
#[must_use]
pub fn matches(record: &Record, state: &FilterState) -> bool {
    matches_text(record, &state.search.to_lowercase()) && matches_facets(record, state)
}

/// `needle` must already be lowercased.
fn matches_text(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |field: Option<&str>| field.is_some_and(|v| v.to_lowercase().contains(needle));
    contains(Some(record.name.as_str()))
        || contains(record.location.as_deref())
        || contains(record.description.as_deref())
}

fn matches_facets(record: &Record, state: &FilterState) -> bool {
    state
        .selections
        .iter()
        .all(|(facet, selected)| matches_facet(record, *facet, selected))
}

fn matches_facet(record: &Record, facet: Facet, selected: &str) -> bool {
    if selected == SENTINEL {
        return true;
    }
    match facet {
        Facet::Rating => {
            parse_rating_threshold(selected).is_some_and(|min| record.rating_or_zero() >= min)
        }
        Facet::GoodDateSpot => match selected {
            DATE_SPOT_YES => record.is_good_date_spot(),
            DATE_SPOT_NO => !record.is_good_date_spot(),
            _ => false,
        },
        _ => facet.value_of(record) == Some(selected),
    }
}

/// `"3+"` → `3.0`, `"5"` → `5.0`. Unparsable selections match nothing.
fn parse_rating_threshold(selected: &str) -> Option<f64> {
    selected.trim_end_matches('+').trim().parse::<f64>().ok()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
