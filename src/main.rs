// ABOUTME: Entry point for the catalogd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the store, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use catalogd_server::{AppState, CatalogdConfig, create_router};
use catalogd_store::ProductStore;
use clap::Parser;

/// Product catalog manager with a flat-file store and a REST API.
#[derive(Debug, Parser)]
#[command(name = "catalogd", version)]
struct Args {
    /// Data directory (overrides CATALOGD_HOME).
    #[arg(long)]
    home: Option<PathBuf>,

    /// Socket address to bind (overrides CATALOGD_BIND).
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let mut config = CatalogdConfig::from_env()?;
    if let Some(home) = args.home {
        config.home = home;
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let data_file = config.data_file();
    let store = ProductStore::open(&data_file)
        .with_context(|| format!("opening catalog at {}", data_file.display()))?;
    tracing::info!(
        "loaded {} products from {}",
        store.len(),
        data_file.display()
    );

    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("catalogd listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
