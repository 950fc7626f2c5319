//! Occurrence search endpoint handlers

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChartResponse, Query, SearchParams, SearchResponse};
use crate::domain::SearchQuery;

/// GET /api/v1/occurrences
pub async fn search_occurrences(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchQuery::parse(
        &params.species,
        params.country.as_deref(),
        params.years.as_deref(),
    )?;

    let outcome = state.occurrence_service.search(query).await?;

    let detail = if outcome.is_empty() {
        None
    } else {
        Some(
            state
                .species_service
                .detail(outcome.query().species())
                .await,
        )
    };

    Ok(Json(SearchResponse::from_outcome(&outcome, detail)))
}

/// GET /api/v1/occurrences/chart
pub async fn occurrence_chart(
    State(state): State<AppState>,
) -> Result<Json<ChartResponse>, ApiError> {
    debug!("Building country chart");

    let tally = state.occurrence_service.last_tally().await?;

    Ok(Json(ChartResponse::new(tally)))
}
