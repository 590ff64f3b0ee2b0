mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{
    clear_handler, health_handler, index_handler, list_handler, upload_handler,
};
use shiftsheet::config::{Config, MAX_UPLOAD_BYTES};
use shiftsheet::store::{InMemoryStore, RedisStore, ScheduleStore};

#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Config,
    /// Store for extracted schedules
    pub store: Arc<dyn ScheduleStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shiftsheet web server");

    let config = Config::load();
    info!("Extracting schedules for: {}", config.target_name);

    // Prefer Redis, fall back to an in-memory store when the client cannot
    // be created. Connections are made per request, so an unreachable server
    // surfaces later as store errors, not here.
    let store: Arc<dyn ScheduleStore> = match RedisStore::new() {
        Ok(redis_store) => {
            info!("Redis store initialized");
            Arc::new(redis_store)
        }
        Err(e) => {
            tracing::error!("Failed to initialize Redis store: {}", e);
            info!("Using in-memory store as fallback");
            Arc::new(InMemoryStore::default())
        }
    };

    let state = AppState {
        config: config.clone(),
        store,
    };

    // Build the router
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .route("/schedules", get(list_handler).delete(clear_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Bind to address and run server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
