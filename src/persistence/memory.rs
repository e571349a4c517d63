//! In-process event store.
//!
//! [`MemoryStore`] keeps events in a `Vec` guarded by a
//! [`tokio::sync::RwLock`]: reads run concurrently, writes are
//! serialized. Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{EventStore, StoreError};
use crate::domain::{Event, EventChanges, EventId};

/// Ordered in-memory backing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `events`, kept in the given order.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Returns the number of stored events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Returns `true` if the store holds no events.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, event: Event) -> Result<Event, StoreError> {
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn find(&self, id: &EventId) -> Result<Event, StoreError> {
        self.events
            .read()
            .await
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.events.read().await.clone())
    }

    async fn update(&self, id: &EventId, changes: EventChanges) -> Result<Event, StoreError> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        event.apply(changes);
        Ok(event.clone())
    }

    async fn delete(&self, id: &EventId) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| &e.id != id);
        if events.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
