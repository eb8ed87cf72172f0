use axum::{routing::get, Router};

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Mount service-level routes (intended for root-level, NOT under `/api`).
///
/// ```text
/// GET /        -> welcome
/// GET /health  -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnostics::welcome))
        .route("/health", get(diagnostics::health_check))
}
