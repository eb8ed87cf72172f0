//! Deployment-aware error detail.
//!
//! [`AppError`](crate::error::AppError) always renders `detail: null` and
//! stashes the full [`ErrorEnvelope`] in the response extensions. This
//! layer removes that extension from every response and, when the server is
//! not running in production, re-renders the body with `detail` filled in.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::ServerConfig;
use crate::error::ErrorEnvelope;

pub async fn render_error_detail(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(envelope) = response.extensions_mut().remove::<ErrorEnvelope>() else {
        return response;
    };

    if config.expose_error_detail() {
        match serde_json::to_vec(&envelope) {
            Ok(bytes) => {
                response.headers_mut().remove(CONTENT_LENGTH);
                *response.body_mut() = Body::from(bytes);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to render error detail");
            }
        }
    }

    response
}
