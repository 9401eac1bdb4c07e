//! HTTP server initialization and runtime setup.
//!
//! Handles store and policy construction, worker spawning, and Axum server
//! lifecycle.

use crate::application::services::{RedirectService, ShortenService};
use crate::config::Config;
use crate::domain::policy::ContentPolicy;
use crate::domain::purge_worker::run_purge_worker;
use crate::infrastructure::policy::{AllowAllPolicy, DenyListPolicy};
use crate::infrastructure::store::MemoryMappingStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory mapping store
/// - Content policy (deny list or no-op)
/// - Background purge worker (when enabled)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the bind fails or the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryMappingStore::new());

    let policy: Arc<dyn ContentPolicy> = match &config.policy_denylist {
        Some(csv) => {
            tracing::info!("Content policy enabled (deny list)");
            Arc::new(DenyListPolicy::from_csv(csv))
        }
        None => {
            tracing::info!("Content policy disabled");
            Arc::new(AllowAllPolicy::new())
        }
    };

    let shorten_service = Arc::new(ShortenService::new(
        store.clone(),
        policy,
        config.code_length,
    ));
    let redirect_service = Arc::new(RedirectService::new(store.clone()));

    if config.purge_interval_seconds > 0 {
        tokio::spawn(run_purge_worker(
            store.clone(),
            Duration::from_secs(config.purge_interval_seconds),
        ));
        tracing::info!("Purge worker started");
    }

    let state = AppState {
        shorten_service,
        redirect_service,
        store,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
