//! Canonical carousel product.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product card as stored in the product cache and shown by the carousel.
///
/// `price` is always pre-formatted (see [`Price::display`](super::Price::display)).
/// `is_favorite` is derived from the favorite set and is never authoritative
/// on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub url: String,
    pub is_favorite: bool,
}
