mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use stormtracker_core::{seed, StormStore};
use stormtracker_gateway::{App, AppState};
use stormtracker_storage::{InMemoryStormStore, MySqlStormStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormatArg::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormatArg::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn build_store(config: &CLI) -> anyhow::Result<Arc<dyn StormStore>> {
    match config.storage {
        StorageBackendArg::InMemory => {
            let store = InMemoryStormStore::with_offset(config.id_offset)
                .context("invalid in-memory id offset")?;
            Ok(Arc::new(store))
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStormStore::connect(mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            store
                .ensure_schema()
                .await
                .context("failed to create storms table")?;
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    init_tracing(config.log_format);

    let store = build_store(&config).await?;

    if config.seed_sample_data {
        let seeded = seed(store.as_ref()).await.context("failed to seed sample storms")?;
        info!(count = seeded.len(), "seeded sample storms");
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        storage_backend = %config.storage,
        "starting storm tracker server"
    );

    axum::serve(listener, App::router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
