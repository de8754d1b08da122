//! End-to-end checks over a fixture file: load, index, filter, sort.

use std::path::PathBuf;

use dinemap_core::{
    browse, build_facet_index, load_records, ConfigError, Facet, FilterState, SortKey,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_and_normalizes_fixture_rows() {
    let records = load_records(&fixture("restaurants.json")).expect("fixture should load");
    assert_eq!(records.len(), 3, "row without id should be skipped");
    assert_eq!(records[1].rating, Some(3.0));
    assert_eq!(records[1].price_range.as_deref(), Some("$"));
}

#[test]
fn facet_index_reflects_fixture_values() {
    let records = load_records(&fixture("restaurants.json")).unwrap();
    let index = build_facet_index(&records);
    assert_eq!(index.cuisines, vec!["Italian", "Thai"]);
    assert_eq!(index.price_ranges, vec!["$", "$$"]);
    assert_eq!(index.locations, vec!["CBD", "Fitzroy"]);
    assert_eq!(index.food_types, vec!["Pasta"]);

    let options = index.options(Facet::Cuisine);
    assert_eq!(options[0].value, "all");
    assert_eq!(options[0].label, "All cuisines");
    assert_eq!(options.len(), 3);
}

#[test]
fn search_matches_description_but_not_cuisine() {
    let records = load_records(&fixture("restaurants.json")).unwrap();
    let state = FilterState::new().with_search("thai");
    let result = browse(&records, &state, SortKey::Name);
    let ids: Vec<_> = result.records.iter().map(|r| r.id.as_str()).collect();
    // Beta Place is Thai by cuisine only; Sala Thai matches by name.
    assert_eq!(ids, vec!["c3"]);
}

#[test]
fn combined_facets_sorted_by_rating() {
    let records = load_records(&fixture("restaurants.json")).unwrap();
    let state = FilterState::new()
        .with(Facet::Cuisine, "Thai")
        .with(Facet::PriceRange, "$");
    let result = browse(&records, &state, SortKey::Rating);
    let ids: Vec<_> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "c3"]);
    assert_eq!(result.active_filter_count, 2);
    assert_eq!(result.total, 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_records(&fixture("does-not-exist.json")).unwrap_err();
    assert!(
        matches!(err, ConfigError::RecordsFileIo { .. }),
        "expected RecordsFileIo, got: {err:?}"
    );
}
