use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use storefront_core::error::CoreError;
use storefront_db::error::StoreError;

/// Application-level error type for HTTP handlers and middleware.
///
/// Wraps [`CoreError`] for domain errors, [`StoreError`] for data-access
/// failures, and the extractor rejections axum produces for malformed
/// requests. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An opaque data-access failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body was not valid JSON for the expected shape.
    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),

    /// A path segment could not be parsed (e.g. a non-integer id).
    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept this method.
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// An internal error with a human-readable message (panics, middleware failures).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
///
/// The response body is always rendered with `detail: null`; the full
/// envelope travels in the response extensions so
/// [`crate::middleware::error_detail`] can re-render it outside production.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub code: &'static str,
    pub detail: Option<String>,
}

impl ErrorEnvelope {
    fn redacted(&self) -> Self {
        Self {
            detail: None,
            ..self.clone()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Data-access failures ---
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),

            // --- Extractor rejections ---
            AppError::Json(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            AppError::Path(rejection) => {
                (rejection.status(), "INVALID_PATH", rejection.body_text())
            }

            // --- Router and middleware errors ---
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::MethodNotAllowed { method, .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                format!("Method {method} is not allowed on this resource"),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "Request timed out".to_string(),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let envelope = ErrorEnvelope {
            error: message,
            code,
            detail: Some(self.to_string()),
        };

        let mut response = (status, axum::Json(envelope.redacted())).into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}
