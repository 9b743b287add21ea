use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payments_lifecycle::application::ledger::PaymentLedger;
use payments_lifecycle::config::ServerConfig;
use payments_lifecycle::interfaces::http::http_serve;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ledger = PaymentLedger::new(config.payment_store().into_diagnostic()?);
    ledger.initialize().await.into_diagnostic()?;
    info!("Payment store has been initialized");

    http_serve::start(Arc::new(config), Arc::new(ledger))
        .await
        .into_diagnostic()?;

    Ok(())
}
