mod adapters;
mod application;
mod domain;
mod services;

use adapters::{routes::build_router, state::AppState};
use axum::http::HeaderValue;
use domain::config::{server::ServerConfig, storage::StorageConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let storage_config = StorageConfig::from_env();

    tracing::info!(
        "Starting product catalog with storage at {}",
        storage_config.storage_path.display()
    );

    let cors = match &server_config.cors_allowed_origins {
        Some(allowed_origins) => {
            let mut origins = Vec::with_capacity(allowed_origins.len());
            for origin in allowed_origins {
                match origin.parse::<HeaderValue>() {
                    Ok(value) => origins.push(value),
                    Err(_) => {
                        tracing::error!("Invalid CORS origin: {}", origin);
                        std::process::exit(1);
                    }
                }
            }
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    let product_repository = match services::create_product_repository(storage_config).await {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("Failed to initialize product storage: {}", e);
            std::process::exit(1);
        }
    };

    let router = build_router(
        AppState::new(product_repository),
        server_config.max_upload_bytes,
        cors,
    );

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", server_config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to port {}: {}", server_config.port, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on 0.0.0.0:{}", server_config.port);

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
