//! Product identifiers.
//!
//! Remote product documents are loosely typed: the same feed may key products
//! by number or by string. [`ProductId`] keeps whichever form the feed used so
//! that a stored id round-trips byte for byte.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier, either numeric or textual.
///
/// Equality is strict: `ProductId::Number(1)` and `ProductId::Text("1")` are
/// different products.
///
/// ```
/// use carousel_core::ProductId;
///
/// let id: ProductId = serde_json::from_str("42").unwrap();
/// assert_eq!(id, ProductId::Number(42));
///
/// let id: ProductId = serde_json::from_str("\"sku-42\"").unwrap();
/// assert_eq!(id.to_string(), "sku-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id as sent by the feed.
    Number(i64),
    /// String id as sent by the feed.
    Text(String),
}

impl ProductId {
    /// Parse an id typed by a person: integers become [`ProductId::Number`],
    /// anything else [`ProductId::Text`].
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Number)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_text_are_distinct() {
        assert_ne!(ProductId::Number(1), ProductId::from("1"));
    }

    #[test]
    fn test_serialize_keeps_original_form() {
        assert_eq!(serde_json::to_string(&ProductId::Number(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&ProductId::from("abc")).unwrap(),
            "\"abc\""
        );
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(ProductId::parse_lenient("12"), ProductId::Number(12));
        assert_eq!(ProductId::parse_lenient("x-12"), ProductId::from("x-12"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::Number(5).to_string(), "5");
        assert_eq!(ProductId::from("five").to_string(), "five");
    }
}
