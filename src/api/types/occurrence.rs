//! Occurrence search request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::occurrence::{Bounds, CountryCount, MapPoint};
use crate::domain::{DetailContent, OccurrenceRecord, SearchOutcome, SearchQuery};

/// Shown when a search matched nothing
pub const NO_RECORDS_NOTICE: &str = "No records found. Try different search criteria.";

/// Raw search form input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub species: String,
    pub country: Option<String>,
    /// `startYear,endYear`
    pub years: Option<String>,
}

/// Everything the frontend needs to draw one search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub generation: u64,
    pub query: SearchQuery,
    pub records: Vec<OccurrenceRecord>,
    pub points: Vec<MapPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub country_tally: Vec<CountryCount>,
    pub pages_fetched: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<u64>,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailContent>,
}

impl SearchResponse {
    pub fn from_outcome(outcome: &SearchOutcome, detail: Option<DetailContent>) -> Self {
        Self {
            generation: outcome.generation(),
            query: outcome.query().clone(),
            records: outcome.records().to_vec(),
            points: outcome.points(),
            bounds: outcome.bounds(),
            country_tally: outcome.country_tally(),
            pages_fetched: outcome.pages_fetched(),
            total_available: outcome.total_available(),
            fetched_at: outcome.fetched_at(),
            notice: outcome
                .is_empty()
                .then(|| NO_RECORDS_NOTICE.to_string()),
            detail,
        }
    }
}

/// Bar chart data for the last search
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub title: String,
    pub data: Vec<CountryCount>,
}

impl ChartResponse {
    pub fn new(data: Vec<CountryCount>) -> Self {
        Self {
            title: "Species Occurrences by Country".to_string(),
            data,
        }
    }
}
