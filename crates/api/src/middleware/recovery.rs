//! Converters for failures raised by the middleware stack itself.
//!
//! Panics and timeouts never pass through a handler, so they are turned
//! into [`AppError`] here and render the same envelope as handler errors.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::BoxError;

use crate::error::AppError;

/// Response for a panic caught by `CatchPanicLayer`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {message}")).into_response()
}

/// Error handler for the fallible timeout layer.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout
    } else {
        AppError::InternalError(err.to_string())
    }
}
