//! Result of one completed search

use chrono::{DateTime, Utc};

use super::aggregator::Aggregation;
use super::query::SearchQuery;
use super::record::OccurrenceRecord;
use super::tally::{mapped_points, tally_by_country, Bounds, CountryCount, MapPoint};

/// Aggregated records for one search, tagged with its generation
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    generation: u64,
    query: SearchQuery,
    records: Vec<OccurrenceRecord>,
    pages_fetched: u32,
    total_available: Option<u64>,
    fetched_at: DateTime<Utc>,
}

impl SearchOutcome {
    pub fn new(generation: u64, query: SearchQuery, aggregation: Aggregation) -> Self {
        Self {
            generation,
            query,
            records: aggregation.records,
            pages_fetched: aggregation.pages_fetched,
            total_available: aggregation.total_available,
            fetched_at: Utc::now(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn records(&self) -> &[OccurrenceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn total_available(&self) -> Option<u64> {
        self.total_available
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn points(&self) -> Vec<MapPoint> {
        mapped_points(&self.records)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points())
    }

    pub fn country_tally(&self) -> Vec<CountryCount> {
        tally_by_country(&self.records)
    }
}
