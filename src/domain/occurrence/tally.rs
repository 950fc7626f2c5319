//! Derived views over an aggregated record collection

use std::collections::HashMap;

use serde::Serialize;

use super::record::OccurrenceRecord;

/// Number of occurrences recorded in one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

/// Groups records by country, most frequent first.
///
/// Ties are ordered by country name. Records without a country are skipped.
pub fn tally_by_country(records: &[OccurrenceRecord]) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for country in records.iter().filter_map(OccurrenceRecord::country_name) {
        *counts.entry(country).or_default() += 1;
    }

    let mut tally: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect();

    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    tally
}

/// A point ready for a marker or heat layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub scientific_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Records that carry both coordinates, in arrival order
pub fn mapped_points(records: &[OccurrenceRecord]) -> Vec<MapPoint> {
    records
        .iter()
        .filter_map(|record| {
            let (lat, lon) = record.coordinates()?;
            Some(MapPoint {
                lat,
                lon,
                scientific_name: record.scientific_name.clone(),
                event_date: record.event_date.clone(),
                country: record.country.clone(),
            })
        })
        .collect()
}

/// Bounding box of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn of(points: &[MapPoint]) -> Option<Self> {
        let first = points.first()?;

        let initial = Self {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };

        Some(points.iter().skip(1).fold(initial, |b, p| Self {
            south: b.south.min(p.lat),
            west: b.west.min(p.lon),
            north: b.north.max(p.lat),
            east: b.east.max(p.lon),
        }))
    }
}
