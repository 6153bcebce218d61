use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use journey_server::cache::{CacheConfig, LineSequenceCache};
use journey_server::config::ServerConfig;
use journey_server::tfl::TflClient;
use journey_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env().expect("Failed to load configuration");

    let tfl = TflClient::new(config.tfl.clone()).expect("Failed to create TfL client");
    let cache = LineSequenceCache::new(&CacheConfig::default());
    let state = AppState::new(tfl, cache, config.planner.clone());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(addr = %config.bind_addr, base_url = %config.tfl.base_url, "journey planner listening");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/journey  - Plan a journey (?from=&to=[&date=&time=])");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
