//! Occurrence records as returned by the GBIF occurrence search

use serde::{Deserialize, Serialize};

/// A single reported sighting or specimen of a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRecord {
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub decimal_latitude: Option<f64>,
    #[serde(default)]
    pub decimal_longitude: Option<f64>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl OccurrenceRecord {
    /// Latitude/longitude pair when both are present and finite
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.decimal_latitude, self.decimal_longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    /// Country name, ignoring blank values
    pub fn country_name(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// One window of the paged occurrence search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencePage {
    /// Total matching records reported by the server
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<OccurrenceRecord>,
    #[serde(default)]
    pub end_of_records: Option<bool>,
}
