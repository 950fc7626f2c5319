//! Clients for the third-party APIs behind the explorer

mod gbif;
pub mod http_client;
mod rest_countries;
mod wikipedia;

pub use gbif::{GbifClient, DEFAULT_GBIF_BASE_URL};
pub use http_client::{HttpClient, HttpClientTrait};
pub use rest_countries::{RestCountriesClient, DEFAULT_COUNTRIES_BASE_URL};
pub use wikipedia::{WikipediaClient, DEFAULT_WIKIPEDIA_BASE_URL};
