use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair carried on a record by the content store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A restaurant entry as consumed by the facet index and the filter/sort
/// engine.
///
/// Only `id` and `name` are required. Categorical fields have no fixed
/// enumeration; their valid values are whatever the current collection holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque identifier, unique within a collection.
    pub id: String,
    pub name: String,
    /// Free-text area label, e.g. `"CBD"` or `"Fitzroy"`.
    pub location: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub cuisine: Option<String>,
    #[serde(alias = "food_type")]
    pub food_type: Option<String>,
    #[serde(alias = "price_range")]
    pub price_range: Option<String>,
    /// Expected in `[0, 5]`; not validated.
    pub rating: Option<f64>,
    #[serde(alias = "good_date_spot")]
    pub good_date_spot: Option<bool>,
    #[serde(alias = "seating_size")]
    pub seating_size: Option<String>,
    #[serde(alias = "restaurant_type")]
    pub restaurant_type: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "created_time")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(alias = "last_edited_time")]
    pub last_edited_time: Option<DateTime<Utc>>,
    /// Unmodeled store attributes, passed through untouched.
    #[serde(default)]
    pub raw: serde_json::Value,
}

impl Record {
    /// Builds a record with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            address: None,
            lat: None,
            lng: None,
            cuisine: None,
            food_type: None,
            price_range: None,
            rating: None,
            good_date_spot: None,
            seating_size: None,
            restaurant_type: None,
            description: None,
            created_time: None,
            last_edited_time: None,
            raw: serde_json::Value::Null,
        }
    }

    /// Rating used for threshold filtering and sorting; absent counts as `0`.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_good_date_spot(&self) -> bool {
        self.good_date_spot.unwrap_or(false)
    }

    /// Stored coordinates, only when both halves are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }

    /// Location hints for geocoding: the area label, if any.
    #[must_use]
    pub fn location_hints(&self) -> Vec<String> {
        self.location
            .iter()
            .filter(|l| !l.is_empty())
            .cloned()
            .collect()
    }
}
