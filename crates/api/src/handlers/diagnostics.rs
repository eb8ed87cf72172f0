//! Service-level handlers mounted outside the `/products` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use storefront_core::types::Timestamp;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Simple Products REST API.",
    })
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = storefront_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimeResponse {
    pub server_time: Timestamp,
}

/// GET /api/testdb -- reads the database clock to prove a query round-trips.
pub async fn test_db(State(state): State<AppState>) -> AppResult<Json<ServerTimeResponse>> {
    let server_time = storefront_db::server_time(&state.pool).await?;
    Ok(Json(ServerTimeResponse { server_time }))
}
