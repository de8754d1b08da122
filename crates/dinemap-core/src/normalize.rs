//! Normalization from raw content-store rows to [`Record`].
//!
//! Store rows carry a title plus a loosely-typed `attrs` object whose keys
//! drift between camelCase and snake_case and whose numbers are sometimes
//! strings. Everything is coerced here so the filter engine only ever sees
//! typed fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::record::Record;
use crate::CoreError;

const UNNAMED: &str = "Unnamed Restaurant";

/// One row as returned by the backing store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub attrs: Value,
}

/// Normalizes a single [`RawRow`] into a [`Record`].
///
/// # Errors
///
/// Returns [`CoreError::MissingId`] if the row has no usable id.
pub fn normalize_row(row: RawRow) -> Result<Record, CoreError> {
    let attrs = if row.attrs.is_object() {
        row.attrs
    } else {
        Value::Object(Map::new())
    };

    let name = row
        .title
        .filter(|t| !t.is_empty())
        .or_else(|| text(&attrs, &["name"]))
        .unwrap_or_else(|| UNNAMED.to_owned());

    let id = row
        .id
        .as_ref()
        .and_then(id_string)
        .ok_or_else(|| CoreError::MissingId {
            title: name.clone(),
        })?;

    // `location` is either the area label (string) or a geo object.
    let geo = ["location", "loc"]
        .iter()
        .find_map(|key| attrs.get(*key).filter(|v| v.is_object()));

    let lat = geo.and_then(|g| number(g, &["lat", "latitude"]));
    let lng = geo.and_then(|g| number(g, &["lng", "lon", "longitude"]));
    let address = geo
        .and_then(|g| text(g, &["address"]))
        .or_else(|| text(&attrs, &["address"]));

    let mut record = Record::new(id, name);
    record.location = text(&attrs, &["location", "area"]);
    record.address = address;
    record.lat = lat;
    record.lng = lng;
    record.cuisine = text(&attrs, &["cuisine"]);
    record.food_type = text(&attrs, &["food_type", "foodType"]);
    record.price_range = text(&attrs, &["price_range", "priceRange"]);
    record.rating = number(&attrs, &["rating"]);
    record.good_date_spot = flag(&attrs, &["good_date_spot", "goodDateSpot"]);
    record.seating_size = text(&attrs, &["seating_size", "seatingSize"]);
    record.restaurant_type = text(&attrs, &["restaurant_type", "restaurantType"]);
    record.description = text(&attrs, &["description"]);
    record.created_time = timestamp(&attrs, "created_time");
    record.last_edited_time = timestamp(&attrs, "last_edited_time");
    record.raw = attrs;
    Ok(record)
}

/// Normalizes a full batch. Rows that cannot be normalized are logged and
/// skipped.
pub fn normalize_rows<I>(rows: I) -> Vec<Record>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter()
        .filter_map(|row| match normalize_row(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping row");
                None
            }
        })
        .collect()
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First non-empty string among `keys`.
fn text(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}

/// First numeric value among `keys`; numeric strings are accepted.
/// `"NaN"` and `"inf"` parse as `f64` but are treated as absent.
fn number(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        let value = match obj.get(*key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite())
    })
}

fn flag(obj: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(true),
            "no" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn timestamp(obj: &Value, key: &str) -> Option<DateTime<Utc>> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
