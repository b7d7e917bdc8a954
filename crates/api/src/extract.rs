//! Validating extractors.
//!
//! Drop-in replacements for Axum's `Json`, `Query` and `Path` whose
//! rejections go through [`AppError`], so every malformed request gets the
//! same `{ "error", "code" }` envelope as the rest of the API.
//!
//! ```ignore
//! async fn handler(ValidPath(id): ValidPath<i64>, ValidJson(item): ValidJson<Item>) { .. }
//! ```

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use store_core::error::CoreError;

use crate::error::AppError;

/// JSON request body, deserialized into `T`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Query string, deserialized into `T`.
///
/// Pairs are percent-decoded and folded into a map, so a repeated key keeps
/// its last value. Every value reaches `T` as a string.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let params: Map<String, Value> = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect();

        serde_json::from_value(Value::Object(params))
            .map(ValidQuery)
            .map_err(|e| {
                CoreError::Validation(format!("Failed to deserialize query string: {e}")).into()
            })
    }
}

/// Path parameters, deserialized into `T`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
