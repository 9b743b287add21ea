use super::{default_routers, payments};
use crate::application::ledger::PaymentLedger;
use crate::config::ServerConfig;
use axum::{Router, http::StatusCode, routing::get};
use std::{io, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router without transport layers.
pub fn router(ledger: Arc<PaymentLedger>) -> Router {
    Router::new()
        .merge(payments::routes(ledger))
        .route("/health-check", get(default_routers::health_check))
        .fallback(default_routers::not_found)
}

/// Builds the router wrapped in the timeout, body limit and tracing layers.
pub fn app(config: &ServerConfig, ledger: Arc<PaymentLedger>) -> Router {
    router(ledger)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeout_secs),
        ))
        .layer(RequestBodyLimitLayer::new(config.body_limit_kb * 1024))
        .layer(TraceLayer::new_for_http())
}

pub async fn start(config: Arc<ServerConfig>, ledger: Arc<PaymentLedger>) -> io::Result<()> {
    let app = app(&config, ledger);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
