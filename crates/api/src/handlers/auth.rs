//! Handler for the pseudo-login endpoint.
//!
//! Credentials are required but never checked, and the issued token is not
//! remembered. This exists so clients can exercise their login flow.

use std::fmt;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::extract::ValidQuery;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /auth`. Empty strings are accepted.
#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /auth?username=..&password=..
///
/// Returns a fresh random access token for any credential pair.
pub async fn login(
    State(state): State<AppState>,
    ValidQuery(credentials): ValidQuery<Credentials>,
) -> Json<AccessTokenResponse> {
    tracing::info!(username = %credentials.username, "Issuing access token");

    Json(AccessTokenResponse {
        access_token: state.tokens.access_token(),
    })
}
