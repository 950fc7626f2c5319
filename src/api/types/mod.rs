//! Request and response types for the HTTP API

pub mod country;
pub mod error;
pub mod occurrence;
pub mod query;
pub mod species;

pub use country::{CountriesResponse, CountrySuggestParams, ReloadResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use occurrence::{ChartResponse, SearchParams, SearchResponse, NO_RECORDS_NOTICE};
pub use query::Query;
pub use species::{CatalogCategoryResponse, CatalogResponse, SuggestParams};
