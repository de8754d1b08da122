//! Extra display fields pulled from the store's property map.
//!
//! Records sourced from a Notion-style database carry `raw.properties`, a map
//! from column label to a typed property object. Columns already surfaced as
//! first-class [`Record`] fields are skipped.

use serde::Serialize;
use serde_json::Value;

use crate::record::Record;

const SURFACED: [&str; 6] = [
    "Restaurant Name",
    "Location",
    "Cuisine Type",
    "Rating (1-5)",
    "Typical Price (pp)",
    "What's Good To Try?",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

/// Label/value pairs for every non-empty property not already modeled,
/// ordered by label.
#[must_use]
pub fn additional_details(record: &Record) -> Vec<DetailField> {
    let Some(properties) = record
        .raw
        .get("properties")
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    let mut fields: Vec<DetailField> = properties
        .iter()
        .filter(|(label, _)| !SURFACED.contains(&label.as_str()))
        .filter_map(|(label, property)| {
            property_value(property)
                .filter(|v| !v.is_empty())
                .map(|value| DetailField {
                    label: label.clone(),
                    value,
                })
        })
        .collect();
    fields.sort_by(|a, b| a.label.cmp(&b.label));
    fields
}

/// Plain-text rendering of one property object, `None` when it has no value.
fn property_value(property: &Value) -> Option<String> {
    let first_plain_text = |key: &str| {
        property
            .get(key)?
            .as_array()?
            .first()?
            .get("plain_text")?
            .as_str()
            .map(str::to_owned)
    };

    if property.get("title").is_some() {
        return first_plain_text("title");
    }
    if property.get("rich_text").is_some() {
        return first_plain_text("rich_text");
    }
    if let Some(select) = property.get("select").filter(|v| !v.is_null()) {
        return select.get("name")?.as_str().map(str::to_owned);
    }
    if let Some(items) = property.get("multi_select").and_then(Value::as_array) {
        let names: Vec<&str> = items
            .iter()
            .filter_map(|item| item.get("name")?.as_str())
            .collect();
        return Some(names.join(", "));
    }
    if let Some(number) = property.get("number").filter(|v| !v.is_null()) {
        return Some(number.to_string());
    }
    if let Some(checked) = property.get("checkbox").and_then(Value::as_bool) {
        return Some(if checked { "Yes" } else { "No" }.to_owned());
    }
    if let Some(date) = property.get("date").filter(|v| !v.is_null()) {
        return date.get("start")?.as_str().map(str::to_owned);
    }
    ["url", "email", "phone_number"]
        .iter()
        .find_map(|key| property.get(*key)?.as_str().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn with_properties(properties: Value) -> Record {
        let mut record = Record::new("r1", "Sala Thai");
        record.raw = json!({ "properties": properties });
        record
    }

    #[test]
    fn no_property_map_yields_nothing() {
        assert!(additional_details(&Record::new("r1", "Sala Thai")).is_empty());
    }

    #[test]
    fn renders_each_property_kind() {
        let record = with_properties(json!({
            "Chef": {"rich_text": [{"plain_text": "Somchai"}]},
            "Vibe": {"select": {"name": "Casual"}},
            "Dishes": {"multi_select": [{"name": "Larb"}, {"name": "Som tum"}]},
            "Visits": {"number": 3},
            "BYO": {"checkbox": false},
            "Visited": {"date": {"start": "2024-02-10"}},
            "Website": {"url": "https://example.com"},
            "Phone": {"phone_number": "03 9000 0000"}
        }));

        let fields = additional_details(&record);
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("BYO", "No"),
                ("Chef", "Somchai"),
                ("Dishes", "Larb, Som tum"),
                ("Phone", "03 9000 0000"),
                ("Vibe", "Casual"),
                ("Visited", "2024-02-10"),
                ("Visits", "3"),
                ("Website", "https://example.com"),
            ]
        );
    }

    #[test]
    fn skips_surfaced_and_empty_properties() {
        let record = with_properties(json!({
            "Restaurant Name": {"title": [{"plain_text": "Sala Thai"}]},
            "Cuisine Type": {"select": {"name": "Thai"}},
            "Notes": {"rich_text": []},
            "Tags": {"multi_select": []},
            "Owner": {"select": null},
            "Parking": {"checkbox": true}
        }));

        let fields = additional_details(&record);
        assert_eq!(
            fields,
            vec![DetailField {
                label: "Parking".to_owned(),
                value: "Yes".to_owned(),
            }]
        );
    }
}
