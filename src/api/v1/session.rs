//! Session endpoint handlers

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// POST /api/v1/session/reset
pub async fn reset_session(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.session.reset().await?;
    info!("Session reset");

    Ok(StatusCode::NO_CONTENT)
}
