//! Web shim: an HTML form and a JSON endpoint around the coach.

pub mod dto;
pub mod handlers;
pub mod page;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;

pub use dto::{ErrorResponse, PlanForm, PlanRequest};
pub use handlers::AppState;

/// Creates the router with all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit_form))
        .route("/api/plan", post(handlers::api_plan))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
