pub mod health;
pub mod product;

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /testdb                     database clock round-trip
/// /products                   list, create
/// /products/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/testdb", get(diagnostics::test_db))
        .nest("/products", product::router())
}
