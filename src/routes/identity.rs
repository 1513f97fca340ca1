//! Identity routes: token retrieval through the configured identity service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::services::identity::IdentityError;
use crate::state::AppState;

const LOGIN_FAILED: &str = "Login failed";

/// `GET /login-test`: log in upstream and relay the token.
pub async fn login_test(State(state): State<AppState>) -> Response {
    let result = state.identity.get_token().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "identity login failed");
    }
    login_response(result)
}

/// Map a login outcome to the two response shapes. Upstream detail is dropped.
pub(crate) fn login_response(result: Result<String, IdentityError>) -> Response {
    match result {
        Ok(token) => (StatusCode::OK, Json(json!({ "success": true, "token": token }))).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": LOGIN_FAILED }))).into_response(),
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
