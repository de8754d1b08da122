use serde::{Deserialize, Serialize};

use crate::error::GeocodeError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One entry of a search response. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

impl Candidate {
    /// Parses the textual coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if either half is not a number.
    pub fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let parse = |field: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| GeocodeError::InvalidCoordinate {
                    field,
                    value: value.to_owned(),
                })
        };
        Ok(Coordinates {
            lat: parse("lat", &self.lat)?,
            lng: parse("lon", &self.lon)?,
        })
    }
}

/// A completed lookup. Both variants are cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Found(Coordinates),
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn coordinates(self) -> Option<Coordinates> {
        match self {
            Resolution::Found(c) => Some(c),
            Resolution::NotFound => None,
        }
    }
}
