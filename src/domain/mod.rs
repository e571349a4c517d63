//! Domain layer: the event record and its identifier.

pub mod event;
pub mod event_id;

pub use event::{Event, EventChanges};
pub use event_id::EventId;
