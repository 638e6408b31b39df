use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an adventure.
///
/// The search backend has emitted both string and integer ids; both are
/// accepted on the wire and normalized to their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireAdventureId")]
pub struct AdventureId(String);

impl AdventureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdventureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AdventureId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AdventureId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for AdventureId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<AdventureId> for String {
    fn from(value: AdventureId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireAdventureId {
    Text(String),
    Integer(i64),
}

impl From<WireAdventureId> for AdventureId {
    fn from(raw: WireAdventureId) -> Self {
        match raw {
            WireAdventureId::Text(s) => Self(s),
            WireAdventureId::Integer(n) => Self(n.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_string_id() {
        let id: AdventureId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn deserializes_integer_id() {
        let id: AdventureId = serde_json::from_str("42").unwrap();
        assert_eq!(id, AdventureId::from("42"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&AdventureId::from(7)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn rejects_non_scalar_id() {
        let result = serde_json::from_str::<AdventureId>("{\"id\": 1}");
        assert!(result.is_err());
    }
}
