//! Observability HTTP Routes

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::fruit_routes::{method_not_allowed_handler, AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}

/// Health check route
pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health_handler).fallback(method_not_allowed_handler),
    )
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.name().to_string(),
    };

    (StatusCode::OK, Json(response))
}
