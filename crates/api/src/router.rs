//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderName;
use axum::Router;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::fallback;
use crate::middleware::error_detail::render_error_detail;
use crate::middleware::origin::{reject_disallowed_origin, AllowedOrigins};
use crate::middleware::recovery::{handle_middleware_error, handle_panic};
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// Unmatched paths and methods fall back to [`AppError`](crate::error::AppError)
/// responses. The middleware stack is applied bottom-up:
///
/// 1. Panic recovery (catch panics, return the 500 envelope)
/// 2. Request timeout (408 envelope)
/// 3. CORS response headers
/// 4. Origin allow-list (rejects before routing)
/// 5. Propagate request ID to response
/// 6. Structured request/response tracing
/// 7. Set request ID on incoming requests
/// 8. Error detail rendering (outermost, sees every error envelope)
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let allowed_origins = AllowedOrigins::new(config.cors_origins.clone());
    let cors = allowed_origins.cors_layer();
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Welcome and health at root level (not under /api).
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        // Must follow every route so it reaches all method routers.
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .fallback(fallback::route_not_found)
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                ))),
        )
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            allowed_origins,
            reject_disallowed_origin,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(axum::middleware::from_fn_with_state(
            config,
            render_error_detail,
        ))
        .with_state(state)
}
