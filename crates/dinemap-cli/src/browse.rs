//! `list`, `facets`, and `show` handlers.

use std::collections::BTreeMap;

use clap::Args;
use dinemap_core::{
    additional_details, browse, build_facet_index, BrowseResult, Facet, FacetOption, FilterState,
    Record, SortKey,
};

/// Facet selections, search text, and sort order shared by `list` and `geocode`.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text matched against name, location, and description
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub food_type: Option<String>,

    #[arg(long)]
    pub price_range: Option<String>,

    /// Minimum rating
    #[arg(long, value_parser = ["all", "1+", "2+", "3+", "4+", "5"])]
    pub rating: Option<String>,

    #[arg(long, value_parser = ["all", "yes", "no"])]
    pub good_date_spot: Option<String>,

    #[arg(long)]
    pub seating_size: Option<String>,

    #[arg(long)]
    pub restaurant_type: Option<String>,

    /// Area label, e.g. "CBD"
    #[arg(long)]
    pub location: Option<String>,

    /// Sort order: `name` or `rating`
    #[arg(long, default_value_t = SortKey::Name)]
    pub sort: SortKey,
}

impl FilterArgs {
    pub(crate) fn filter_state(&self) -> FilterState {
        let selections = [
            (Facet::Cuisine, &self.cuisine),
            (Facet::FoodType, &self.food_type),
            (Facet::PriceRange, &self.price_range),
            (Facet::Rating, &self.rating),
            (Facet::GoodDateSpot, &self.good_date_spot),
            (Facet::SeatingSize, &self.seating_size),
            (Facet::RestaurantType, &self.restaurant_type),
            (Facet::Location, &self.location),
        ];

        let mut state = FilterState::new().with_search(self.search.clone());
        for (facet, value) in selections {
            if let Some(value) = value {
                state.set(facet, value.clone());
            }
        }
        state
    }
}

pub(crate) fn run_list(records: &[Record], filters: &FilterArgs, json: bool) -> anyhow::Result<()> {
    let result = browse(records, &filters.filter_state(), filters.sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
        return Ok(());
    }

    for record in &result.records {
        println!("{}", format_row(record));
    }
    println!("{}", footer(&result));
    Ok(())
}

pub(crate) fn run_facets(records: &[Record], json: bool) -> anyhow::Result<()> {
    let index = build_facet_index(records);
    let options: BTreeMap<&str, Vec<FacetOption>> = Facet::ALL
        .into_iter()
        .map(|facet| (facet.key(), index.options(facet)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    for facet in Facet::ALL {
        let labels: Vec<String> = index
            .options(facet)
            .into_iter()
            .map(|o| o.label)
            .collect();
        println!("{}: {}", facet.title(), labels.join(" | "));
    }
    Ok(())
}

pub(crate) fn run_show(records: &[Record], id: &str) -> anyhow::Result<()> {
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow::anyhow!("restaurant '{id}' not found"))?;

    println!("{}", record.name);
    let fields = [
        ("Location", record.location.clone()),
        ("Address", record.address.clone()),
        ("Cuisine", record.cuisine.clone()),
        ("Food type", record.food_type.clone()),
        ("Price", record.price_range.clone()),
        ("Rating", record.rating.map(|r| format!("{r}/5"))),
        (
            "Good for dates",
            record
                .good_date_spot
                .map(|d| if d { "Yes" } else { "No" }.to_owned()),
        ),
        ("Seating", record.seating_size.clone()),
        ("Type", record.restaurant_type.clone()),
        ("What's good", record.description.clone()),
        (
            "Added",
            record.created_time.map(|t| t.date_naive().to_string()),
        ),
        (
            "Last updated",
            record.last_edited_time.map(|t| t.date_naive().to_string()),
        ),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
    for detail in additional_details(record) {
        println!("  {}: {}", detail.label, detail.value);
    }
    Ok(())
}

/// One line per record: name, rating, and whichever categorical labels exist.
fn format_row(record: &Record) -> String {
    let mut parts = vec![record.name.clone()];
    if let Some(rating) = record.rating {
        parts.push(format!("{rating}/5"));
    }
    parts.extend(
        [
            &record.cuisine,
            &record.price_range,
            &record.location,
        ]
        .into_iter()
        .flatten()
        .cloned(),
    );
    if record.is_good_date_spot() {
        parts.push("date spot".to_owned());
    }
    parts.join("  ·  ")
}

fn footer(result: &BrowseResult<'_>) -> String {
    match result.active_filter_count {
        0 => result.summary(),
        1 => format!("{} (1 filter active)", result.summary()),
        n => format!("{} ({n} filters active)", result.summary()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_state_carries_every_selection() {
        let args = FilterArgs {
            search: "pasta".to_owned(),
            cuisine: Some("Italian".to_owned()),
            rating: Some("4+".to_owned()),
            good_date_spot: Some("all".to_owned()),
            ..FilterArgs::default()
        };
        let state = args.filter_state();
        assert_eq!(state.search, "pasta");
        assert_eq!(state.selection(Facet::Cuisine), "Italian");
        assert_eq!(state.selection(Facet::Rating), "4+");
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn format_row_skips_absent_fields() {
        let mut record = Record::new("a", "Alpha Diner");
        record.rating = Some(4.5);
        record.location = Some("CBD".to_owned());
        assert_eq!(format_row(&record), "Alpha Diner  ·  4.5/5  ·  CBD");
    }

    #[test]
    fn footer_mentions_active_filters() {
        let records = vec![Record::new("a", "Alpha Diner")];
        let state = FilterState::new().with(Facet::PriceRange, "$$");
        let result = browse(&records, &state, SortKey::Name);
        assert_eq!(footer(&result), "0 restaurants found (1 filter active)");

        let result = browse(&records, &FilterState::default(), SortKey::Name);
        assert_eq!(footer(&result), "1 restaurant found");
    }

    #[test]
    fn show_unknown_id_is_an_error() {
        let records = vec![Record::new("a", "Alpha Diner")];
        assert!(run_show(&records, "zzz").is_err());
    }
}
