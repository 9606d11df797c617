//! Router configuration.

use crate::handlers::catalog::{fetch_event, list_events, update_event};
use crate::handlers::health::health_check;
use crate::middleware::request_id_layer;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Wires the three protocol endpoints plus the health check, and layers
/// request-id tracking and HTTP tracing over all of them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update", post(update_event))
        .route("/fetch", get(fetch_event))
        .route("/names", get(list_events))
        .route("/health", get(health_check))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
