//! Event service: id assignment, logging, and store delegation.

use std::sync::Arc;

use crate::domain::{Event, EventChanges, EventId};
use crate::persistence::{EventStore, StoreError};

/// Orchestration layer for all event operations.
///
/// Holds the storage driver chosen at startup. Handlers never talk to a
/// store directly, so swapping backends does not touch the HTTP layer.
#[derive(Debug, Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    /// Creates a new `EventService` over the given driver.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Name of the active storage backend.
    #[must_use]
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Returns all events in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates the driver's [`StoreError`].
    pub async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let events = self.store.find_all().await?;
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }

    /// Returns the event with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such event exists.
    pub async fn get_event(&self, id: &EventId) -> Result<Event, StoreError> {
        self.store.find(id).await
    }

    /// Stores a new event. An empty id is replaced by a generated one;
    /// any other id is kept as supplied, even if already in use.
    ///
    /// # Errors
    ///
    /// Propagates the driver's [`StoreError`].
    pub async fn create_event(&self, mut event: Event) -> Result<Event, StoreError> {
        if event.id.is_empty() {
            event.id = EventId::generate();
        }
        let created = self.store.create(event).await?;
        tracing::info!(id = %created.id, title = %created.title, "event created");
        Ok(created)
    }

    /// Replaces title and description of an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such event exists.
    pub async fn update_event(
        &self,
        id: &EventId,
        changes: EventChanges,
    ) -> Result<Event, StoreError> {
        let updated = self.store.update(id, changes).await?;
        tracing::info!(%id, "event updated");
        Ok(updated)
    }

    /// Removes the event with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such event exists.
    pub async fn delete_event(&self, id: &EventId) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        tracing::info!(%id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use tokio_test::assert_ok;

    use super::*;
    use crate::persistence::MemoryStore;

    fn service() -> EventService {
        EventService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_keeps_caller_id() {
        let svc = service();
        let Ok(created) = svc.create_event(Event::new("1", "A", "B")).await else {
            panic!("create failed");
        };
        assert_eq!(created.id.as_str(), "1");
    }

    #[tokio::test]
    async fn create_generates_missing_id() {
        let svc = service();
        let Ok(created) = svc.create_event(Event::new("", "A", "B")).await else {
            panic!("create failed");
        };
        assert!(!created.id.is_empty());

        let Ok(found) = svc.get_event(&created.id).await else {
            panic!("generated id must be findable");
        };
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let id = EventId::from("1");
        assert_ok!(svc.create_event(Event::new("1", "A", "B")).await);
        assert!(svc.delete_event(&id).await.is_ok());
        assert!(matches!(
            svc.get_event(&id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(svc.list_events().await, Ok(events) if events.is_empty()));
    }

    #[test]
    fn reports_backend_name() {
        assert_eq!(service().backend(), "memory");
    }
}
