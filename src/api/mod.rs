use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::signal;

pub mod core;
pub mod server;

use crate::api::core::SchemaApi;
use crate::api::server::http::{create_router, AppState, HttpServer};
use crate::config::Config;
use crate::storage::{Neo4jStorage, StorageClient};
use crate::utils::logging;

pub async fn start_service(config_path: String) -> Result<()> {
    let config = Config::load_or_default(&config_path);

    logging::init(&config.log).map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    info!("Configuration loaded from {}: {:?}", config_path, config);

    let result = run_server(config).await;
    if let Err(e) = &result {
        error!("Service stopped with error: {:#}", e);
    }

    info!("Shutting down staffgraph service...");
    logging::shutdown();
    result
}

async fn run_server(config: Config) -> Result<()> {
    let storage = Arc::new(
        Neo4jStorage::connect(&config.store)
            .await
            .with_context(|| format!("Failed to connect to {}", config.store.uri))?,
    );

    // 数据库暂时不可达时照常启动，由 /health 报告状态
    match storage.verify().await {
        Ok(()) => SchemaApi::new(storage.clone()).ensure_schema().await?,
        Err(e) => warn!("Store not reachable at startup, skipping schema setup: {}", e),
    }

    let server = Arc::new(HttpServer::new(storage));
    let router = create_router(AppState::new(server));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("HTTP server listening on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// 只创建索引和约束，然后退出
pub async fn init_schema(config_path: String) -> Result<()> {
    let config = Config::load_or_default(&config_path);
    let storage = Arc::new(
        Neo4jStorage::connect(&config.store)
            .await
            .with_context(|| format!("Failed to connect to {}", config.store.uri))?,
    );
    SchemaApi::new(storage).ensure_schema().await?;
    println!("Schema ready on {}", config.store.uri);
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Received shutdown signal");
}
