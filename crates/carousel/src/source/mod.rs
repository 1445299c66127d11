//! Remote product sources.
//!
//! The controller never talks to the network directly; it is handed a
//! [`ProductSource`] and asks it for the raw product document once per cold
//! cache.

mod http;

use std::future::Future;

use carousel_core::ProductId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;

pub use http::HttpProductSource;

/// A product record as it arrives from the remote document.
///
/// Feeds disagree on field names and types, so every alternative spelling
/// the normalizer understands is captured here. Only `id` is required; an
/// optional field holding something other than a string or number reads as
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Number or numeric string; anything else is treated as missing.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

impl RawProduct {
    /// A record carrying only an id.
    #[must_use]
    pub const fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            price: None,
            image: None,
            img: None,
            image_url: None,
            product_url: None,
            url: None,
        }
    }
}

/// Parse the remote document: a JSON array of product records.
///
/// A record whose `id` is missing or is neither an integer nor a string is
/// skipped with a warning; the rest of the document still loads.
///
/// # Errors
///
/// Returns an error if `body` is not a JSON array.
pub fn parse_document(body: &str) -> Result<Vec<RawProduct>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(body)?;
    let total = records.len();

    let products: Vec<RawProduct> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            serde_json::from_value(record)
                .inspect_err(|e| warn!(index, error = %e, "Skipping unusable product record"))
                .ok()
        })
        .collect();

    if products.len() < total {
        debug!(kept = products.len(), total, "Product document partially usable");
    }
    Ok(products)
}

/// Strings pass through and numbers are rendered; anything else is `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Something that can produce the raw product document.
pub trait ProductSource {
    /// Fetch every raw product record.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport, status, or parse failure.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawProduct>, FetchError>> + Send;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_product_accepts_alternate_spellings() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"id": 3, "name": "Coat", "price": 899.9, "imageUrl": "https://img/3", "productUrl": "https://p/3"}"#,
        )
        .unwrap();

        assert_eq!(raw.id, ProductId::Number(3));
        assert_eq!(raw.image_url.as_deref(), Some("https://img/3"));
        assert_eq!(raw.product_url.as_deref(), Some("https://p/3"));
        assert!(raw.image.is_none());
        assert!(raw.img.is_none());
    }

    #[test]
    fn test_raw_product_only_id_required() {
        let raw: RawProduct = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(raw, RawProduct::new(ProductId::from("abc")));
    }

    #[test]
    fn test_raw_product_null_price_is_missing() {
        let raw: RawProduct = serde_json::from_str(r#"{"id": 1, "price": null}"#).unwrap();
        assert!(raw.price.is_none());
    }

    #[test]
    fn test_raw_product_without_id_is_rejected() {
        assert!(serde_json::from_str::<RawProduct>(r#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_raw_product_mistyped_fields_read_as_missing() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"id": 2, "name": 42, "image": false, "img": {"src": "x"}, "url": ["u"], "productUrl": null}"#,
        )
        .unwrap();

        assert_eq!(raw.name.as_deref(), Some("42"));
        assert!(raw.image.is_none());
        assert!(raw.img.is_none());
        assert!(raw.url.is_none());
        assert!(raw.product_url.is_none());
    }

    // =========================================================================
    // Document Parsing
    // =========================================================================

    #[test]
    fn test_parse_document_keeps_every_usable_record() {
        let products = parse_document(
            r#"[
                {"id": 1, "name": "ok", "price": 10},
                {"id": 2, "name": 42, "price": 20},
                {"id": 3, "image": true}
            ]"#,
        )
        .unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(
            ids,
            vec![ProductId::Number(1), ProductId::Number(2), ProductId::Number(3)]
        );
    }

    #[test]
    fn test_parse_document_skips_records_with_unusable_id() {
        let products = parse_document(
            r#"[{"id": 1}, {"id": 2.5}, {"name": "no id"}, {"id": null}, {"id": "sku-4"}]"#,
        )
        .unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Number(1), ProductId::from("sku-4")]);
    }

    #[test]
    fn test_parse_document_rejects_non_array() {
        assert!(parse_document(r#"{"products": []}"#).is_err());
        assert!(parse_document("[{").is_err());
    }

    #[test]
    fn test_parse_document_empty_array() {
        assert!(parse_document("[]").unwrap().is_empty());
    }
}
