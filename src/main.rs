use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sysprops_service::secret_store::AwsSecretStore;
use sysprops_service::state::AppState;
use sysprops_service::{api, config, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg_path =
        std::env::var("SYSPROPS_CONFIG").unwrap_or_else(|_| "config/sysprops.toml".into());
    let mut cfg = config::load(&cfg_path).await?;

    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        cfg.server.port = port;
    }

    if cfg.is_in_maintenance() {
        tracing::warn!("maintenance mode is active; /properties will answer 503");
    }

    let store = Arc::new(AwsSecretStore::from_config(&cfg.secret_store).await);
    tracing::info!(region = %cfg.secret_store.region, "secrets client ready");

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .context("invalid host or port")?;
    let app = api::app(AppState::new(cfg, store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("sysprops service listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
