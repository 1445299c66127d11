//! Raw and cached product normalization.
//!
//! Two entry points:
//!
//! - [`normalize`] turns a [`RawProduct`] from the remote document into a
//!   canonical [`Product`], resolving missing fields through fixed fallback
//!   chains.
//! - [`normalize_cached`] touches only the price of an already-normalized
//!   product, rewriting legacy currency spellings. Applying it twice is the
//!   same as applying it once.

use core::fmt;

use carousel_core::{FavoriteSet, Price, Product, ProductId};
use serde_json::Value;
use tracing::debug;

use crate::source::RawProduct;

/// Image shown when a record carries none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x400?text=No+Image";

/// Base for product URLs built from an id.
pub const PRODUCT_URL_BASE: &str = "https://www.lcwaikiki.com/tr-TR/TR/urun/";

/// Legacy currency spellings and their rewrites, applied in order wherever
/// they occur in the price. The output contains none of the patterns.
const LEGACY_PRICE_REWRITES: &[(&str, &str)] = &[
    (", TL", " TRY"),
    (", TRY", " TRY"),
    (" TL", " TRY"),
    ("TL", " TRY"),
];

/// A missing or unusable field that was resolved by a fallback.
///
/// Gaps are never errors; they are reported at `debug` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationGap {
    /// No price in the record; shown as zero.
    MissingPrice,
    /// Price present but not a number; shown as zero.
    InvalidPrice,
    /// None of the image fields present; placeholder used.
    MissingImage,
    /// None of the URL fields present; URL built from the id.
    MissingUrl,
    /// Cached price used a legacy currency spelling.
    LegacyPriceFormat,
}

impl fmt::Display for NormalizationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MissingPrice => "missing price",
            Self::InvalidPrice => "invalid price",
            Self::MissingImage => "missing image",
            Self::MissingUrl => "missing url",
            Self::LegacyPriceFormat => "legacy price format",
        };
        f.write_str(label)
    }
}

/// Values substituted for missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    /// Image URL used when a record has none.
    pub placeholder_image: String,
    /// Base URL that a product id is appended to.
    pub product_url_base: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            product_url_base: PRODUCT_URL_BASE.to_string(),
        }
    }
}

impl Fallbacks {
    /// Canonical product page URL for `id`.
    #[must_use]
    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/{id}", self.product_url_base.trim_end_matches('/'))
    }
}

/// Map a raw remote record to a canonical product.
#[must_use]
pub fn normalize(raw: RawProduct, favorites: &FavoriteSet, fallbacks: &Fallbacks) -> Product {
    let RawProduct {
        id,
        name,
        price,
        image,
        img,
        image_url,
        product_url,
        url,
    } = raw;

    let price = parse_price(price.as_ref())
        .unwrap_or_else(|gap| {
            debug!(product_id = %id, %gap, "Price fallback");
            Price::zero()
        })
        .display();

    let image = first_present([image, img, image_url]).unwrap_or_else(|| {
        debug!(product_id = %id, gap = %NormalizationGap::MissingImage, "Image fallback");
        fallbacks.placeholder_image.clone()
    });

    let url = first_present([product_url, url]).unwrap_or_else(|| {
        debug!(product_id = %id, gap = %NormalizationGap::MissingUrl, "URL fallback");
        fallbacks.product_url(&id)
    });

    let is_favorite = favorites.contains(&id);

    Product {
        id,
        name: name.unwrap_or_default(),
        price,
        image,
        url,
        is_favorite,
    }
}

/// Clean up the price of a product read back from the cache.
///
/// Every other field is returned untouched.
#[must_use]
pub fn normalize_cached(mut product: Product) -> Product {
    if let Some(cleaned) = clean_legacy_price(&product.price) {
        debug!(
            product_id = %product.id,
            gap = %NormalizationGap::LegacyPriceFormat,
            from = %product.price,
            to = %cleaned,
            "Rewrote cached price"
        );
        product.price = cleaned;
    }
    product
}

fn parse_price(value: Option<&Value>) -> Result<Price, NormalizationGap> {
    match value {
        None | Some(Value::Null) => Err(NormalizationGap::MissingPrice),
        Some(Value::Number(n)) => {
            Price::parse(&n.to_string()).map_err(|_| NormalizationGap::InvalidPrice)
        }
        Some(Value::String(s)) => Price::parse(s).map_err(|_| NormalizationGap::InvalidPrice),
        Some(_) => Err(NormalizationGap::InvalidPrice),
    }
}

/// First candidate that is present and non-empty.
fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
}

fn clean_legacy_price(price: &str) -> Option<String> {
    let rewritten = LEGACY_PRICE_REWRITES
        .iter()
        .fold(price.to_owned(), |acc, (from, to)| acc.replace(from, to));
    let cleaned = rewritten.trim();
    (cleaned != price).then(|| cleaned.to_owned())
}
