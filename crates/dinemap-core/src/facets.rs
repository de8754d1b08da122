//! Facet definitions and the data-derived facet index.
//!
//! Categorical facets enumerate whatever values the current collection holds.
//! Only the rating ladder and the date-spot tri-state are fixed.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::record::Record;
use crate::CoreError;

/// The "no constraint" selection shared by every facet.
pub const SENTINEL: &str = "all";

/// Fixed rating thresholds. `k+` passes ratings `>= k`; `5` passes only `5`.
pub const RATING_LADDER: [&str; 5] = ["1+", "2+", "3+", "4+", "5"];

pub const DATE_SPOT_YES: &str = "yes";
pub const DATE_SPOT_NO: &str = "no";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Cuisine,
    FoodType,
    PriceRange,
    Rating,
    GoodDateSpot,
    SeatingSize,
    RestaurantType,
    Location,
}

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Cuisine,
        Facet::FoodType,
        Facet::PriceRange,
        Facet::Rating,
        Facet::GoodDateSpot,
        Facet::SeatingSize,
        Facet::RestaurantType,
        Facet::Location,
    ];

    /// Key used by the UI state surface, e.g. `"foodType"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Facet::Cuisine => "cuisine",
            Facet::FoodType => "foodType",
            Facet::PriceRange => "priceRange",
            Facet::Rating => "rating",
            Facet::GoodDateSpot => "goodDateSpot",
            Facet::SeatingSize => "seatingSize",
            Facet::RestaurantType => "restaurantType",
            Facet::Location => "location",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Facet::Cuisine => "Cuisine",
            Facet::FoodType => "Food Type",
            Facet::PriceRange => "Price Range",
            Facet::Rating => "Rating",
            Facet::GoodDateSpot => "Good for Dates",
            Facet::SeatingSize => "Seating Size",
            Facet::RestaurantType => "Restaurant Type",
            Facet::Location => "Location",
        }
    }

    /// Label shown for the sentinel option of this facet.
    #[must_use]
    pub fn sentinel_label(self) -> &'static str {
        match self {
            Facet::Cuisine => "All cuisines",
            Facet::FoodType | Facet::RestaurantType => "All types",
            Facet::PriceRange => "Any price",
            Facet::Rating => "Any rating",
            Facet::GoodDateSpot => "Any",
            Facet::SeatingSize => "Any size",
            Facet::Location => "All locations",
        }
    }

    /// Whether the option set of this facet is derived from data.
    #[must_use]
    pub fn is_categorical(self) -> bool {
        !matches!(self, Facet::Rating | Facet::GoodDateSpot)
    }

    /// The record's value for a categorical facet. `None` for the fixed facets.
    #[must_use]
    pub fn value_of(self, record: &Record) -> Option<&str> {
        let value = match self {
            Facet::Cuisine => &record.cuisine,
            Facet::FoodType => &record.food_type,
            Facet::PriceRange => &record.price_range,
            Facet::SeatingSize => &record.seating_size,
            Facet::RestaurantType => &record.restaurant_type,
            Facet::Location => &record.location,
            Facet::Rating | Facet::GoodDateSpot => return None,
        };
        value.as_deref()
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.key() == s)
            .ok_or_else(|| CoreError::UnknownFacet(s.to_owned()))
    }
}

/// One selectable value in a facet's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Distinct non-empty values per categorical facet, lexicographically ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub cuisines: Vec<String>,
    pub food_types: Vec<String>,
    pub price_ranges: Vec<String>,
    pub seating_sizes: Vec<String>,
    pub restaurant_types: Vec<String>,
    pub locations: Vec<String>,
}

impl FacetIndex {
    /// Data-derived values for a categorical facet, without the sentinel.
    /// Empty for the fixed facets.
    #[must_use]
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Cuisine => &self.cuisines,
            Facet::FoodType => &self.food_types,
            Facet::PriceRange => &self.price_ranges,
            Facet::SeatingSize => &self.seating_sizes,
            Facet::RestaurantType => &self.restaurant_types,
            Facet::Location => &self.locations,
            Facet::Rating | Facet::GoodDateSpot => &[],
        }
    }

    /// Full option list for a facet, sentinel first.
    #[must_use]
    pub fn options(&self, facet: Facet) -> Vec<FacetOption> {
        let mut options = vec![FacetOption::new(SENTINEL, facet.sentinel_label())];
        if facet.is_categorical() {
            options.extend(
                self.values(facet)
                    .iter()
                    .map(|v| FacetOption::new(v.clone(), v.clone())),
            );
        } else if facet == Facet::Rating {
            options.extend(RATING_LADDER.iter().map(|step| {
                let label = if *step == "5" {
                    "5 stars".to_owned()
                } else {
                    format!("{step} stars & up")
                };
                FacetOption::new(*step, label)
            }));
        } else {
            options.push(FacetOption::new(DATE_SPOT_YES, "Perfect for dates"));
            options.push(FacetOption::new(DATE_SPOT_NO, "Not for dates"));
        }
        options
    }
}

/// Derives the option sets for every categorical facet from `records`.
///
/// Pure and deterministic; recompute whenever the collection is replaced.
#[must_use]
pub fn build_facet_index(records: &[Record]) -> FacetIndex {
    let distinct = |facet: Facet| -> Vec<String> {
        records
            .iter()
            .filter_map(|r| facet.value_of(r))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    };

    FacetIndex {
        cuisines: distinct(Facet::Cuisine),
        food_types: distinct(Facet::FoodType),
        price_ranges: distinct(Facet::PriceRange),
        seating_sizes: distinct(Facet::SeatingSize),
        restaurant_types: distinct(Facet::RestaurantType),
        locations: distinct(Facet::Location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, cuisine: Option<&str>, location: Option<&str>) -> Record {
        let mut r = Record::new(id, format!("Restaurant {id}"));
        r.cuisine = cuisine.map(str::to_owned);
        r.location = location.map(str::to_owned);
        r
    }

    #[test]
    fn collects_distinct_sorted_values() {
        let records = vec![
            record("1", Some("Thai"), Some("CBD")),
            record("2", Some("Italian"), Some("Fitzroy")),
            record("3", Some("Thai"), None),
            record("4", Some(""), Some("CBD")),
        ];
        let index = build_facet_index(&records);
        assert_eq!(index.cuisines, vec!["Italian", "Thai"]);
        assert_eq!(index.locations, vec!["CBD", "Fitzroy"]);
    }

    #[test]
    fn facet_without_values_yields_only_sentinel_option() {
        let index = build_facet_index(&[record("1", None, None)]);
        assert!(index.food_types.is_empty());

        let options = index.options(Facet::FoodType);
        assert_eq!(options, vec![FacetOption::new("all", "All types")]);
    }

    #[test]
    fn only_rating_and_date_spot_are_fixed() {
        let fixed: Vec<Facet> = Facet::ALL
            .into_iter()
            .filter(|f| !f.is_categorical())
            .collect();
        assert_eq!(fixed, vec![Facet::Rating, Facet::GoodDateSpot]);

        // Fixed facets ignore the data entirely.
        let index = build_facet_index(&[record("1", Some("Thai"), Some("CBD"))]);
        for facet in fixed {
            assert!(index.values(facet).is_empty());
            assert!(index.options(facet).len() > 1);
        }
    }

    #[test]
    fn empty_collection_yields_empty_index() {
        assert_eq!(build_facet_index(&[]), FacetIndex::default());
    }

    #[test]
    fn ordering_is_case_sensitive_lexicographic() {
        let records = vec![
            record("1", Some("thai"), None),
            record("2", Some("Thai"), None),
            record("3", Some("Burmese"), None),
        ];
        let index = build_facet_index(&records);
        assert_eq!(index.cuisines, vec!["Burmese", "Thai", "thai"]);
    }

    #[test]
    fn rating_options_are_fixed_ladder() {
        let index = build_facet_index(&[]);
        let values: Vec<_> = index
            .options(Facet::Rating)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["all", "1+", "2+", "3+", "4+", "5"]);

        let labels: Vec<_> = index
            .options(Facet::Rating)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels[1], "1+ stars & up");
        assert_eq!(labels[5], "5 stars");
    }

    #[test]
    fn date_spot_options_are_tri_state() {
        let values: Vec<_> = FacetIndex::default()
            .options(Facet::GoodDateSpot)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["all", "yes", "no"]);
    }

    #[test]
    fn facet_keys_round_trip_through_from_str() {
        for facet in Facet::ALL {
            assert_eq!(facet.key().parse::<Facet>().unwrap(), facet);
        }
        assert!("cuisineType".parse::<Facet>().is_err());
    }
}
