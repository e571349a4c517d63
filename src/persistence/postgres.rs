//! PostgreSQL implementation of the storage driver.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::store::{EventStore, StoreError};
use crate::config::DatabaseConfig;
use crate::domain::{Event, EventChanges, EventId};

/// Row shape returned by every event query.
type EventRow = (String, String, String);

fn event_from_row((id, title, description): EventRow) -> Event {
    Event::new(id, title, description)
}

/// PostgreSQL-backed event store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against `config.url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the database is unreachable
    /// within the configured timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Migration`] if a migration fails.
    pub async fn init(&self) -> Result<(), StoreError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))
    }
}

#[async_trait]
impl EventStore for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, event: Event) -> Result<Event, StoreError> {
        sqlx::query("INSERT INTO events (id, title, description) VALUES ($1, $2, $3)")
            .bind(event.id.as_str())
            .bind(&event.title)
            .bind(&event.description)
            .execute(&self.pool)
            .await?;

        Ok(event)
    }

    async fn find(&self, id: &EventId) -> Result<Event, StoreError> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, title, description FROM events WHERE id = $1 ORDER BY seq ASC LIMIT 1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(event_from_row)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, title, description FROM events ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(event_from_row).collect())
    }

    async fn update(&self, id: &EventId, changes: EventChanges) -> Result<Event, StoreError> {
        let row = sqlx::query_as::<_, EventRow>(
            "UPDATE events SET title = $2, description = $3, updated_at = now() \
             WHERE seq = (SELECT seq FROM events WHERE id = $1 ORDER BY seq ASC LIMIT 1) \
             RETURNING id, title, description",
        )
        .bind(id.as_str())
        .bind(&changes.title)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await?;

        row.map(event_from_row)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn delete(&self, id: &EventId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
