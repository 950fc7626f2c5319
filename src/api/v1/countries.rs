//! Country directory endpoint handlers

use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CountriesResponse, CountrySuggestParams, Query, ReloadResponse,
};
use crate::domain::Country;

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    let countries = state.country_service.list().await;

    Json(CountriesResponse {
        degraded: countries.is_empty(),
        countries,
    })
}

/// GET /api/v1/countries/suggest
pub async fn suggest_countries(
    State(state): State<AppState>,
    Query(params): Query<CountrySuggestParams>,
) -> Json<Vec<Country>> {
    Json(state.country_service.suggest(&params.q).await)
}

/// POST /api/v1/countries/reload
pub async fn reload_countries(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let loaded = state.country_service.reload().await?;

    Ok(Json(ReloadResponse { loaded }))
}
