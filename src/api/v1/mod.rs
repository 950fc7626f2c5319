//! Explorer v1 API endpoints

pub mod countries;
pub mod occurrences;
pub mod session;
pub mod species;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/occurrences", get(occurrences::search_occurrences))
        .route("/occurrences/chart", get(occurrences::occurrence_chart))
        .route("/species/suggest", get(species::suggest_species))
        .route("/species/catalog", get(species::list_catalog))
        .route(
            "/species/catalog/{category}",
            get(species::get_catalog_category),
        )
        .route("/species/{name}/summary", get(species::species_summary))
        .route("/countries", get(countries::list_countries))
        .route("/countries/suggest", get(countries::suggest_countries))
        .route("/countries/reload", post(countries::reload_countries))
        .route("/session/reset", post(session::reset_session))
}
