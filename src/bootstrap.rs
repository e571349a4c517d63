//! Startup wiring: storage driver selection and connection.

use std::sync::Arc;

use crate::config::{ServiceConfig, StoreBackend};
use crate::domain::Event;
use crate::persistence::{EventStore, MemoryStore, PostgresStore, StoreError};

/// Builds the storage driver selected by `config.store_backend`.
///
/// The PostgreSQL driver is connected and its schema migrated before
/// this returns, so a server is never started on a store that cannot
/// serve requests.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] or [`StoreError::Migration`] if the
/// database cannot be reached or initialized.
pub async fn open_store(config: &ServiceConfig) -> Result<Arc<dyn EventStore>, StoreError> {
    match config.store_backend {
        StoreBackend::Memory => {
            let store = if config.seed_sample_event {
                MemoryStore::with_events(vec![Event::sample()])
            } else {
                MemoryStore::new()
            };
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let store = PostgresStore::connect(&config.database).await?;
            tracing::info!("connected to database");
            store.init().await?;
            tracing::info!("database schema ready");
            Ok(Arc::new(store))
        }
    }
}
