//! Filter-then-sort composition over the current collection.

use crate::filter::{apply_filters, FilterState};
use crate::record::Record;
use crate::sort::{apply_sort, SortKey};

/// The visible sequence derived from one `(records, filter, sort)` snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResult<'a> {
    pub records: Vec<&'a Record>,
    /// Size of the source collection before filtering.
    pub total: usize,
    pub active_filter_count: usize,
}

impl BrowseResult<'_> {
    /// `"1 restaurant found"` / `"12 restaurants found"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let n = self.records.len();
        let plural = if n == 1 { "" } else { "s" };
        format!("{n} restaurant{plural} found")
    }
}

/// Recomputes the visible records from scratch: filter, then sort.
///
/// Both inputs are taken together so a stale filter is never paired with a
/// replaced collection.
#[must_use]
pub fn browse<'a>(records: &'a [Record], state: &FilterState, sort: SortKey) -> BrowseResult<'a> {
    let filtered = apply_filters(records, state);
    BrowseResult {
        records: apply_sort(filtered, sort),
        total: records.len(),
        active_filter_count: state.active_filter_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::Facet;

    fn sample() -> Vec<Record> {
        let mut alpha = Record::new("a", "Alpha Diner");
        alpha.rating = Some(4.5);
        alpha.cuisine = Some("Italian".to_owned());

        let mut beta = Record::new("b", "Beta Place");
        beta.rating = Some(3.0);
        beta.cuisine = Some("Thai".to_owned());

        vec![beta, alpha]
    }

    #[test]
    fn cuisine_filter_sorted_by_name() {
        let records = sample();
        let state = FilterState::new().with(Facet::Cuisine, "Italian");
        let result = browse(&records, &state, SortKey::Name);

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "Alpha Diner");
        assert_eq!(result.total, 2);
        assert_eq!(result.active_filter_count, 1);
        assert_eq!(result.summary(), "1 restaurant found");
    }

    #[test]
    fn default_filter_sorted_by_rating() {
        let records = sample();
        let result = browse(&records, &FilterState::default(), SortKey::Rating);

        let names: Vec<_> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Diner", "Beta Place"]);
        assert_eq!(result.active_filter_count, 0);
        assert_eq!(result.summary(), "2 restaurants found");
    }

    #[test]
    fn empty_result_summary() {
        let records = sample();
        let state = FilterState::new().with_search("zzz");
        assert_eq!(browse(&records, &state, SortKey::Name).summary(), "0 restaurants found");
    }
}
