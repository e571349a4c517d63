//! Event identifier newtype.
//!
//! [`EventId`] wraps the caller-supplied string key of an event. Ids are
//! opaque: any string is accepted, including one that is already in use.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of an [`super::Event`].
///
/// Serialized as a plain JSON string. The default value is the empty
/// string, which the service layer replaces with a generated UUID on
/// create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier from a random UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no identifier was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn generate_yields_distinct_uuids() {
        let a = EventId::generate();
        let b = EventId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn default_is_empty() {
        assert!(EventId::default().is_empty());
        assert!(!EventId::from("1").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let Ok(json) = serde_json::to_string(&EventId::from("abc")) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"abc\"");
    }

    #[test]
    fn display_matches_inner_string() {
        let id = EventId::new("event-42");
        assert_eq!(id.to_string(), "event-42");
    }
}
