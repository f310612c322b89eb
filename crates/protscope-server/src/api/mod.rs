//! Router assembly and server lifecycle

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{
    future::{Future, IntoFuture},
    net::SocketAddr,
    sync::Arc,
    time::Duration,
};
use tokio::{signal, sync::Notify};
use tower_http::compression::CompressionLayer;
use tracing::{info, warn};

use crate::config::{Config, CorsConfig};
use crate::features::{self, SharedSource};
use crate::middleware;
use crate::uniprot::UniProtClient;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: SharedSource,
}

impl AppState {
    pub fn new(source: SharedSource) -> Self {
        Self { source }
    }
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let client = UniProtClient::new(&config.upstream)?;
    info!(
        uniprot = %config.upstream.uniprot_base_url,
        structures = %config.upstream.structure_base_url,
        "Upstream client initialized"
    );

    let app = create_router(AppState::new(Arc::new(client)), &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let signalled = signalled.clone();
        async move {
            shutdown_signal().await;
            signalled.notify_one();
        }
    });

    drain_with_deadline(
        server.into_future(),
        &signalled,
        Duration::from_secs(config.server.shutdown_timeout_secs),
    )
    .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(features::router(state.source))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(cors))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Run `server` to completion, but stop waiting for open connections once
/// `timeout` has passed since `signalled` fired
async fn drain_with_deadline<F>(server: F, signalled: &Notify, timeout: Duration) -> std::io::Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    let deadline = async {
        signalled.notified().await;
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result,
        _ = deadline => {
            warn!("Connections still open after {:?}, forcing shutdown", timeout);
            Ok(())
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
