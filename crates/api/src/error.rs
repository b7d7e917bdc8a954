use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use store_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain and query-string errors, and the Axum
/// body and path rejections raised while validating requests. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `store_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was missing, not JSON, or did not match the schema.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// A path segment could not be parsed into its declared type.
    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::NotImplemented(msg) => {
                    (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED", msg.clone())
                }
            },

            // --- Request validation ---
            AppError::Json(rejection) => {
                classify_rejection(rejection.status(), rejection.body_text())
            }
            AppError::Path(rejection) => {
                classify_rejection(rejection.status(), rejection.body_text())
            }

            AppError::InternalError(msg) => internal(msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log the real cause and return a sanitized 500.
fn internal(msg: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %msg, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map an extractor rejection to the error envelope.
///
/// Client-side rejections keep Axum's status (400, 415, 422) and message,
/// which names the offending field. Server-side ones (e.g. a route declared
/// without the path parameter its handler expects) are sanitized.
fn classify_rejection(status: StatusCode, text: String) -> (StatusCode, &'static str, String) {
    if status.is_server_error() {
        return internal(&text);
    }
    tracing::debug!(%status, error = %text, "Request rejected");
    (status, "VALIDATION_ERROR", text)
}
