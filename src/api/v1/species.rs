//! Species endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CatalogCategoryResponse, CatalogResponse, Query, SuggestParams,
};
use crate::domain::{CatalogCategory, DetailContent};
use crate::infrastructure::services::SuggestionResult;

/// GET /api/v1/species/suggest
pub async fn suggest_species(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<SuggestionResult> {
    Json(state.species_service.suggest(&params.q).await)
}

/// GET /api/v1/species/{name}/summary
pub async fn species_summary(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DetailContent>, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::bad_request("Please enter a species name.").with_param("name"));
    }

    debug!(species = %name, "Loading species summary");

    Ok(Json(state.species_service.detail(&name).await))
}

/// GET /api/v1/species/catalog
pub async fn list_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::all())
}

/// GET /api/v1/species/catalog/{category}
pub async fn get_catalog_category(
    Path(category): Path<String>,
) -> Result<Json<CatalogCategoryResponse>, ApiError> {
    CatalogCategory::from_name(&category)
        .map(|c| Json(c.into()))
        .ok_or_else(|| ApiError::not_found(format!("Unknown category '{}'", category)))
}
