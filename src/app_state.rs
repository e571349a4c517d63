//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EventService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event service for all storage operations.
    pub event_service: Arc<EventService>,
}

impl AppState {
    /// Wraps a service in shareable state.
    #[must_use]
    pub fn new(event_service: EventService) -> Self {
        Self {
            event_service: Arc::new(event_service),
        }
    }
}
