//! The storage driver trait and its error type.

use async_trait::async_trait;

use crate::domain::{Event, EventChanges, EventId};

/// Failures reported by a storage driver.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No event with the given id exists in the backing store.
    #[error("event not found: {0}")]
    NotFound(EventId),

    /// The backend could not be reached or the pool could not be built.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Schema initialization failed.
    #[error("initialization failed: {0}")]
    Migration(String),

    /// A query failed while serving a request.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Pluggable storage driver for events.
///
/// Implementations own their backing store for the lifetime of the
/// process. Ids are not unique: [`find`](Self::find) and
/// [`update`](Self::update) resolve to the first match in insertion
/// order, [`delete`](Self::delete) removes every match.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug {
    /// Short backend name used in logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Appends a new event without checking for id collisions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the backend rejects the write.
    async fn create(&self, event: Event) -> Result<Event, StoreError>;

    /// Returns the first event whose id matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no event has the id.
    async fn find(&self, id: &EventId) -> Result<Event, StoreError>;

    /// Returns every event in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on backend failure.
    async fn find_all(&self) -> Result<Vec<Event>, StoreError>;

    /// Replaces title and description of the first matching event and
    /// returns the updated record. The id is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no event has the id.
    async fn update(&self, id: &EventId, changes: EventChanges) -> Result<Event, StoreError>;

    /// Removes every event with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when nothing was removed.
    async fn delete(&self, id: &EventId) -> Result<(), StoreError>;
}
