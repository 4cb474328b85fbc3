// Bot HTTP host
// Receives channel activities and exposes health and metrics endpoints

pub mod handlers;
pub mod middleware;
pub mod observability;

use crate::bot::{ConnectorClient, SearchBot};
use crate::config::{Config, ServerConfig};
use crate::search::PackageSearchClient;
use anyhow::{Context, Result};
use axum::Router as AxumRouter;
use std::sync::Arc;

use observability::Metrics;

/// Shared host state; every field is read-only across turns
#[derive(Clone)]
pub struct ServerState {
    pub bot: Arc<SearchBot>,
    pub connector: Arc<ConnectorClient>,
    pub config: Config,
    pub metrics: Arc<Metrics>,
}

impl ServerState {
    pub fn new(config: &Config) -> Result<Self> {
        let search = PackageSearchClient::new(&config.registry)
            .context("Failed to build registry client")?;
        let connector = ConnectorClient::new(&config.connector)
            .context("Failed to build connector client")?;

        Ok(Self {
            bot: Arc::new(SearchBot::new(search)),
            connector: Arc::new(connector),
            config: config.clone(),
            metrics: Arc::new(Metrics::new()),
        })
    }
}

/// Run the HTTP server until Ctrl+C
pub fn run_server(server: &ServerConfig, app_config: &Config) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(server.workers.max(1))
        .enable_all()
        .build()?;

    rt.block_on(async {
        let state = ServerState::new(app_config)?;
        let app = build_router(state);

        let listener = bind_listener(server).await?;
        let addr = listener.local_addr()?;
        tracing::info!("Package search bot listening on http://{}", addr);
        tracing::info!("  POST /api/messages - Channel activities");
        tracing::info!("  GET  /health       - Health check");
        tracing::info!("  GET  /metrics      - Prometheus metrics");
        tracing::info!("  Registry: {}", app_config.registry.base_url);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok::<(), anyhow::Error>(())
    })
}

/// Bind `host:port`; host names are resolved, unresolvable hosts are an error
pub async fn bind_listener(server: &ServerConfig) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", server.host, server.port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Build the router with all endpoints
pub fn build_router(state: ServerState) -> AxumRouter {
    use axum::routing::{get, post};
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    AxumRouter::new()
        .route("/api/messages", post(handlers::messages))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::trace_request_mw,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3978);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.workers, 4);
    }

    #[tokio::test]
    async fn test_bind_resolves_localhost_to_loopback() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            workers: 1,
        };
        let listener = bind_listener(&server).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_ip_literal() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
        };
        let listener = bind_listener(&server).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_state_from_default_config() {
        let state = ServerState::new(&Config::default()).unwrap();
        assert_eq!(state.metrics.get_turns_total(), 0);
    }
}
