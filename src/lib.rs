//! Occurrence Explorer API
//!
//! Backend for a species occurrence explorer:
//! - Paged GBIF occurrence search with country tallies and map bounds
//! - Species autocomplete and a browsable catalog of well-known species
//! - Wikipedia summaries cached for the session
//! - A country directory for filter suggestions

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use crate::config::UpstreamConfig;
use domain::{
    CountrySource, DomainError, OccurrenceSource, PaginationAggregator, PaginationConfig,
    SummarySource, SuggestionSource,
};
use infrastructure::{
    cache::InMemoryCache,
    services::{CountryService, OccurrenceService, SpeciesService},
    session::Session,
    upstream::{GbifClient, HttpClient, RestCountriesClient, WikipediaClient},
};
use tracing::info;

/// The third-party data sources the services read from
pub struct UpstreamSources {
    pub occurrences: Arc<dyn OccurrenceSource>,
    pub suggestions: Arc<dyn SuggestionSource>,
    pub summaries: Arc<dyn SummarySource>,
    pub countries: Arc<dyn CountrySource>,
}

impl UpstreamSources {
    /// HTTP-backed sources sharing one connection pool
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let http = Arc::new(HttpClient::with_settings(
            config.timeout(),
            &config.user_agent,
        )?);

        let gbif = Arc::new(GbifClient::with_base_url(
            http.clone(),
            &config.gbif_base_url,
        ));

        Ok(Self {
            occurrences: gbif.clone(),
            suggestions: gbif,
            summaries: Arc::new(WikipediaClient::with_base_url(
                http.clone(),
                &config.wikipedia_base_url,
            )),
            countries: Arc::new(RestCountriesClient::with_base_url(
                http,
                &config.countries_base_url,
            )),
        })
    }
}

/// Wires services and session state around the given sources.
///
/// Nothing is fetched here; the country directory starts empty.
pub fn build_app_state(
    config: &AppConfig,
    sources: UpstreamSources,
) -> Result<AppState, DomainError> {
    let session = Arc::new(Session::new(Arc::new(InMemoryCache::new())));

    let pagination = PaginationConfig::new(config.search.page_size, config.search.max_records)?;

    let occurrence_service = Arc::new(OccurrenceService::new(
        sources.occurrences,
        PaginationAggregator::new(pagination),
        session.clone(),
    ));

    let species_service = Arc::new(SpeciesService::new(
        sources.suggestions,
        sources.summaries,
        session.clone(),
        &config.suggestions,
    ));

    let country_service = Arc::new(CountryService::new(sources.countries));

    Ok(AppState::new(
        occurrence_service,
        species_service,
        country_service,
        session,
    ))
}

/// Create the application state and load the country directory
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(
        gbif = %config.upstream.gbif_base_url,
        page_size = config.search.page_size,
        max_records = config.search.max_records,
        "Initializing application state"
    );

    let sources = UpstreamSources::from_config(&config.upstream)?;
    let state = build_app_state(config, sources)?;

    // A failed load is logged and leaves the directory empty
    state.country_service.load().await;

    Ok(state)
}
