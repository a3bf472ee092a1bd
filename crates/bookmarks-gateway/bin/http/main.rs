mod cli;
mod telemetry;

use crate::cli::{Cli, StorageBackendArg};
use bookmarks_core::StoreGateway;
use bookmarks_gateway::{App, AppState};
use bookmarks_service::{BookmarkService, Importer};
use bookmarks_storage::{InMemoryStore, MongoStore};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);

    info!(storage_backend = %cli.storage, "starting bookmarks");

    match cli.storage {
        StorageBackendArg::InMemory => run(cli, InMemoryStore::new()).await,
        StorageBackendArg::Mongo => {
            let config = cli.mongo_config()?;
            info!(
                database = %config.database,
                collection = %config.collection,
                "using mongo store"
            );
            run(cli, MongoStore::new(config)).await
        }
    }
}

async fn run<G: StoreGateway>(cli: Cli, gateway: G) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = cli.import_file {
        let summary = Importer::new(gateway).import_file(&path).await?;
        info!(
            path = %path.display(),
            attempted = summary.attempted,
            inserted = summary.inserted,
            failed = summary.failed,
            "import complete"
        );
        return Ok(());
    }

    serve(cli.listen_addr, gateway).await?;
    Ok(())
}

async fn serve<G: StoreGateway>(listen_addr: SocketAddr, gateway: G) -> std::io::Result<()> {
    let state = AppState::new(Arc::new(BookmarkService::new(gateway)));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down gateway server");
}
