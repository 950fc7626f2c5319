//! Occurrence search domain: query validation, paging and derived views

mod aggregator;
mod outcome;
mod query;
mod record;
mod source;
mod tally;

pub use aggregator::{
    Aggregation, PaginationAggregator, PaginationConfig, DEFAULT_MAX_RECORDS, DEFAULT_PAGE_SIZE,
};
pub use outcome::SearchOutcome;
pub use query::{parse_year_range, OccurrenceRequest, QueryError, SearchQuery, YearRange};
pub use record::{OccurrencePage, OccurrenceRecord};
pub use source::OccurrenceSource;
pub use tally::{mapped_points, tally_by_country, Bounds, CountryCount, MapPoint};

#[cfg(test)]
pub use source::mock::{record as mock_record, MockOccurrenceSource};
