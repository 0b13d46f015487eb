//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider event identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Create a new `EventId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the event ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Sport key as used by the odds provider (e.g. `basketball_nba`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SportKey(String);

impl SportKey {
    /// Create a new `SportKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the sport key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SportKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SportKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Bookmaker identifier (e.g. `fanduel`, `draftkings`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookmakerKey(String);

impl BookmakerKey {
    /// Create a new `BookmakerKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the bookmaker key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmakerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookmakerKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BookmakerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a recorded bet.
///
/// Generated as UUID v4 for new bets, or constructed from an
/// existing string when read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetId(String);

impl BetId {
    /// Create a new `BetId` with a generated UUID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the bet ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_new_and_as_str() {
        let id = EventId::new("evt-1");
        assert_eq!(id.as_str(), "evt-1");
    }

    #[test]
    fn event_ids_order_lexically() {
        let a = EventId::from("a1");
        let b = EventId::from("b0");
        assert!(a < b);
    }

    #[test]
    fn sport_key_display() {
        let key = SportKey::new("basketball_nba");
        assert_eq!(format!("{}", key), "basketball_nba");
    }

    #[test]
    fn bookmaker_key_from_string() {
        let key = BookmakerKey::from("fanduel".to_string());
        assert_eq!(key.as_str(), "fanduel");
    }

    #[test]
    fn bookmaker_key_serializes_as_plain_string() {
        let key = BookmakerKey::from("draftkings");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"draftkings\"");
    }

    #[test]
    fn bet_id_generates_unique_ids() {
        let id1 = BetId::new();
        let id2 = BetId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn bet_id_is_uuid_format() {
        let id = BetId::new();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn bet_id_from_existing_string() {
        let id = BetId::from("stored-id");
        assert_eq!(id.as_str(), "stored-id");
    }
}
