//! Origin allow-list enforcement.
//!
//! `tower_http::cors::CorsLayer` only decides which response headers to
//! emit; a disallowed origin still reaches the handler. The guard in this
//! module turns such requests away with `403` before routing.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use storefront_core::error::CoreError;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;

/// The fixed set of origins permitted to make cross-origin requests.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Arc<[HeaderValue]>);

impl AllowedOrigins {
    pub fn new(origins: Vec<HeaderValue>) -> Self {
        Self(origins.into())
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    /// CORS response headers for allowed origins.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.0.iter().cloned()))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(3600))
    }
}

/// Reject requests whose `Origin` header is not on the allow-list.
///
/// Requests without an `Origin` header (same-origin navigation, curl,
/// server-to-server) pass through untouched.
pub async fn reject_disallowed_origin(
    State(allowed): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        if !allowed.contains(origin) {
            let shown = origin.to_str().unwrap_or("<non-ascii>");
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Origin '{shown}' is not allowed by CORS"
            ))));
        }
    }
    Ok(next.run(request).await)
}
