pub mod handlers;
pub mod types;
mod upload;

pub use handlers::AppState;

use crate::{
    Result,
    config::Config,
    inference::HttpInferenceClient,
    origin::OriginStorage,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

pub async fn run(config: Config) -> Result<()> {
    // Initialize origin storage
    let storage = OriginStorage::new(&config.server.database_path).await?;
    if storage.is_connected() {
        if let Err(e) = storage.migrate().await {
            error!("Failed to run migrations: {}", e);
        } else if let Err(e) = storage.seed().await {
            error!("Failed to seed species origins: {}", e);
        }
    }

    let inference = HttpInferenceClient::new(&config.inference)?;
    info!(url = inference.base_url(), "Inference service configured");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let app = router(AppState::new(config, Arc::new(inference), Arc::new(storage)));

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn router(state: AppState) -> Router {
    let max_body = state
        .config
        .server
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);
    let body_limit = DefaultBodyLimit::max(max_body);
    let cors = cors_layer(&state.config.server.cors_origins);

    let api = Router::new()
        .route("/predict", post(handlers::predict))
        .route("/analyze", post(handlers::analyze))
        .route("/origins", get(handlers::list_origins))
        .route("/origins/geojson", get(handlers::origins_geojson))
        .route("/origin/:species", get(handlers::get_origin));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down gracefully...");
}
