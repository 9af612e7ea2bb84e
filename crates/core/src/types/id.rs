//! Identifiers assigned by the store API.
//!
//! The API is free to hand out numeric or textual IDs. [`EntityId`] keeps the
//! JSON shape it was received in so that it can be echoed back verbatim (the
//! delete-order request body carries the ID as the API sent it).

use core::fmt;

use serde::{Deserialize, Serialize};

/// An API-assigned entity identifier.
///
/// # Example
///
/// ```rust
/// # use tienda_costa_core::EntityId;
/// let numeric: EntityId = serde_json::from_str("42").unwrap();
/// let textual: EntityId = serde_json::from_str("\"65a1f0\"").unwrap();
///
/// assert_eq!(numeric.to_string(), "42");
/// assert_eq!(textual.to_string(), "65a1f0");
/// assert_eq!(serde_json::to_string(&numeric).unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    /// Integer ID (e.g. an auto-increment column).
    Number(i64),
    /// String ID (e.g. a document store object ID).
    Text(String),
}

impl EntityId {
    /// Parse an ID received as a URL path segment.
    ///
    /// Path segments lose the JSON type, so all-digit segments are treated as
    /// numeric IDs and everything else as text.
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Self {
        segment
            .parse::<i64>()
            .map_or_else(|_| Self::Text(segment.to_owned()), Self::Number)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A record owned by the store API and identified by an [`EntityId`].
pub trait Entity {
    /// The API-assigned identifier.
    fn id(&self) -> &EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_and_text() {
        let n: EntityId = serde_json::from_str("7").expect("number id");
        assert_eq!(n, EntityId::Number(7));

        let t: EntityId = serde_json::from_str("\"abc-1\"").expect("text id");
        assert_eq!(t, EntityId::Text("abc-1".to_string()));
    }

    #[test]
    fn test_serialize_keeps_json_shape() {
        assert_eq!(
            serde_json::to_value(EntityId::from(42)).expect("serialize"),
            serde_json::json!(42)
        );
        assert_eq!(
            serde_json::to_value(EntityId::from("42a")).expect("serialize"),
            serde_json::json!("42a")
        );
    }

    #[test]
    fn test_from_path_segment() {
        assert_eq!(EntityId::from_path_segment("42"), EntityId::Number(42));
        assert_eq!(
            EntityId::from_path_segment("65a1f0c2"),
            EntityId::Text("65a1f0c2".to_string())
        );
    }
}
