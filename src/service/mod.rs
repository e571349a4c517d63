//! Service layer: business logic orchestration.
//!
//! [`EventService`] sits between the HTTP handlers and the storage driver.

pub mod event_service;

pub use event_service::EventService;
