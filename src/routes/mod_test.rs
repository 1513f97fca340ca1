use super::*;
use crate::config::{Credentials, IdentityConfig};
use crate::services::identity::IdentityClient;
use crate::state::test_helpers::{self, MockOccurrences, MockTokenSource};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// App wired to the real identity client, pointed at `login_url`.
fn app_with_identity(login_url: String) -> Router {
    let identity = IdentityClient::new(IdentityConfig {
        login_url,
        credentials: Some(Credentials { username: "alice".into(), password: "hunter2".into() }),
    })
    .unwrap();
    let occurrences = MockOccurrences { gbif_count: 0, inat_count: 0, locations: 0 };
    app(AppState::new(Arc::new(identity), Arc::new(occurrences)))
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn root_returns_banner() {
    let (status, body) = send(app(test_helpers::test_app_state(MockTokenSource::Unreachable)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, BANNER);
}

#[tokio::test]
async fn root_ignores_missing_credentials() {
    let identity = IdentityClient::new(IdentityConfig { login_url: "http://127.0.0.1:1".into(), credentials: None })
        .unwrap();
    let occurrences = MockOccurrences { gbif_count: 0, inat_count: 0, locations: 0 };
    let router = app(AppState::new(Arc::new(identity), Arc::new(occurrences)));

    let (status, body) = send(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, BANNER);
}

// =============================================================================
// GET /login-test
// =============================================================================

#[tokio::test]
async fn login_test_relays_token() {
    let state = test_helpers::test_app_state(MockTokenSource::Token("tok-abc".into()));
    let (status, body) = send(app(state), "/login-test").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "token": "tok-abc"}));
}

#[tokio::test]
async fn login_test_upstream_rejection_is_generic_500() {
    let state = test_helpers::test_app_state(MockTokenSource::Rejected(401));
    let (status, body) = send(app(state), "/login-test").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "Login failed"}));
}

#[tokio::test]
async fn login_test_against_stub_identity_service() {
    let stub = Router::new().route("/api/login", post(|| async { r#"{"token":"live-token"}"# }));
    let base = test_helpers::spawn_stub(stub).await;

    let (status, body) = send(app_with_identity(format!("{base}/api/login")), "/login-test").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["token"], "live-token");
    assert!(!body.contains("alice"));
    assert!(!body.contains("hunter2"));
}

#[tokio::test]
async fn login_test_upstream_5xx_is_generic_500() {
    let stub = Router::new().route(
        "/api/login",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded for user alice") }),
    );
    let base = test_helpers::spawn_stub(stub).await;

    let (status, body) = send(app_with_identity(format!("{base}/api/login")), "/login-test").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body).unwrap(), serde_json::json!({"error": "Login failed"}));
    assert!(!body.contains("alice"));
    assert!(!body.contains("hunter2"));
}

#[tokio::test]
async fn login_test_unreachable_identity_service_is_generic_500() {
    let base = test_helpers::closed_base_url().await;

    let (status, body) = send(app_with_identity(format!("{base}/api/login")), "/login-test").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body).unwrap(), serde_json::json!({"error": "Login failed"}));
}

// =============================================================================
// bloom routes
// =============================================================================

#[tokio::test]
async fn bloom_routes_are_mounted() {
    for uri in ["/api/plants", "/api/plant/salix_caprea", "/api/calendar", "/api/gaps"] {
        let state = test_helpers::test_app_state(MockTokenSource::Unreachable);
        let (status, _) = send(app(state), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn unknown_plant_is_404() {
    let state = test_helpers::test_app_state(MockTokenSource::Unreachable);
    let (status, body) = send(app(state), "/api/plant/rosa_canina").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body).unwrap(), serde_json::json!({"error": "Plant not found"}));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let state = test_helpers::test_app_state(MockTokenSource::Unreachable);
    let (status, _) = send(app(state), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
