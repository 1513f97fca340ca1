//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the liveness banner, the identity login proxy and the bloom data API
//! under a single Axum router. CORS is open because the frontend is served
//! from a different origin.

pub mod bloom;
pub mod identity;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const BANNER: &str = "🚀 NASA Bloom Backend is running!";

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/login-test", get(identity::login_test))
        .route("/api/plants", get(bloom::list_plants))
        .route("/api/plant/{id}", get(bloom::get_plant))
        .route("/api/calendar", get(bloom::calendar))
        .route("/api/gaps", get(bloom::gaps))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    BANNER
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
