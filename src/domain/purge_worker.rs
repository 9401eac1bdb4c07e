//! Periodic sweep deleting expired mappings.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::domain::repositories::MappingRepository;

/// Runs the purge sweep until the process shuts down.
///
/// Each tick removes every mapping whose expiry has passed. The sweep is an
/// optional space reclamation: resolvers compare expiry against the clock on
/// every lookup, so a delayed or disabled sweep never changes redirect
/// behavior.
pub async fn run_purge_worker<R: MappingRepository>(repository: Arc<R>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match repository.purge_expired().await {
            Ok(0) => {}
            Ok(purged) => tracing::info!(purged, "removed expired mappings"),
            Err(e) => tracing::warn!(error = %e, "purge sweep failed"),
        }
    }
}
