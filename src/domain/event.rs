//! The event record and its update payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EventId;

/// An event: the only resource exposed by the gateway.
///
/// Absent JSON fields decode to empty strings; empty values are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Event {
    /// Caller-supplied or generated identifier. Not required to be unique.
    #[schema(value_type = String, example = "1")]
    pub id: EventId,
    /// Short title.
    #[schema(example = "Introduction to Golang")]
    pub title: String,
    /// Free-form description.
    #[schema(example = "Learn the Go")]
    pub description: String,
}

impl Event {
    /// Creates an event from its three fields.
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// The record seeded into a fresh in-memory store when
    /// `SEED_SAMPLE_EVENT` is enabled.
    #[must_use]
    pub fn sample() -> Self {
        Self::new("1", "Introduction to Golang", "Learn the Go")
    }

    /// Overwrites title and description, keeping the id.
    pub fn apply(&mut self, changes: EventChanges) {
        self.title = changes.title;
        self.description = changes.description;
    }
}

/// Replacement values for an existing event.
///
/// The id is deliberately absent: updates never change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EventChanges {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
}

impl EventChanges {
    /// Creates a change set.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
