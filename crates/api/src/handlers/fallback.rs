//! Router fallbacks so unmatched requests still render the error envelope.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Any path with no matching route.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound(format!("{method} {}", uri.path()))
}

/// A matching path that does not accept the request method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
