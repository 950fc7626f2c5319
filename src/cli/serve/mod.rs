//! Serve command - runs API + static frontend on the same port

use std::path::Path;

use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{build_socket_addr, init_logging, load_config};
use crate::api::middleware::logging_middleware;
use crate::api::{api_routes, AppState};

/// Run the combined API + frontend server
pub async fn run() -> anyhow::Result<()> {
    let config = load_config();
    init_logging(&config);

    let state = crate::create_app_state_with_config(&config).await?;
    let app = create_router_with_ui(state, &config.ui.static_dir);

    let addr = build_socket_addr(&config)?;
    info!(
        static_dir = %config.ui.static_dir,
        "Starting server (API + UI) on {}", addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Router with both the API and the frontend files under `/ui`
fn create_router_with_ui(state: AppState, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");

    api_routes()
        .nest_service(
            "/ui",
            ServeDir::new(static_dir).fallback(ServeFile::new(index)),
        )
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
