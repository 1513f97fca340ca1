use bloom_backend::{config, routes, site, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    if config.identity.credentials.is_none() {
        tracing::warn!("EARTHDATA_USERNAME/EARTHDATA_PASSWORD not set; /login-test will fail");
    }

    let table = site::route_table();
    site::validate(&table).expect("frontend route table is malformed");
    tracing::info!(routes = table.len(), "frontend route table validated");

    let state = state::AppState::from_config(&config).expect("upstream client init failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "bloom backend listening");
    axum::serve(listener, app).await.expect("server failed");
}
