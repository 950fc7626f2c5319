//! Domain layer - Core search logic and entities

pub mod cache;
pub mod country;
pub mod error;
pub mod occurrence;
pub mod species;

pub use cache::{Cache, CacheExt};
pub use country::{Country, CountrySource};
pub use error::DomainError;
pub use occurrence::{
    OccurrencePage, OccurrenceRecord, OccurrenceRequest, OccurrenceSource, PaginationAggregator,
    PaginationConfig, QueryError, SearchOutcome, SearchQuery, YearRange,
};
pub use species::{
    CatalogCategory, CommonSpecies, DetailContent, PageSummary, SpeciesSuggestion, SummaryLookup,
    SummarySource, SuggestionSource,
};
