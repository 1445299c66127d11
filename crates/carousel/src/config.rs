//! Carousel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CAROUSEL_SOURCE_URL` - Remote product document (default: recommendation gist)
//! - `CAROUSEL_DATA_DIR` - Directory for persisted records (default: `.carousel`)
//! - `CAROUSEL_VIEWPORT_WIDTH` - Viewport width in pixels, picks card density (default: 1280)
//! - `CAROUSEL_PLACEHOLDER_IMAGE` - Image used when a product has none
//! - `CAROUSEL_PRODUCT_URL_BASE` - Base URL for product links built from an id

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::density::ProductsPerView;
use crate::normalize::{Fallbacks, PLACEHOLDER_IMAGE, PRODUCT_URL_BASE};

/// Remote document used when `CAROUSEL_SOURCE_URL` is not set.
pub const DEFAULT_SOURCE_URL: &str = "https://gist.githubusercontent.com/sevindi/5765c5812bbc8238a38b3cf52f233651/raw/56261d81af8561bf0a7cf692fe572f9e1e91f372/products.json";

const DEFAULT_DATA_DIR: &str = ".carousel";
const DEFAULT_VIEWPORT_WIDTH: &str = "1280";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Carousel configuration.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Remote product document
    pub source_url: Url,
    /// Directory holding the persisted records
    pub data_dir: PathBuf,
    /// Viewport width in CSS pixels
    pub viewport_width: u32,
    /// Values for missing product fields
    pub fallbacks: Fallbacks,
}

impl CarouselConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let source_url = parse_url(
            "CAROUSEL_SOURCE_URL",
            &get_or_default("CAROUSEL_SOURCE_URL", DEFAULT_SOURCE_URL),
        )?;
        let data_dir = PathBuf::from(get_or_default("CAROUSEL_DATA_DIR", DEFAULT_DATA_DIR));
        let viewport_width = get_or_default("CAROUSEL_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH)
            .trim()
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CAROUSEL_VIEWPORT_WIDTH".to_string(), e.to_string())
            })?;

        let placeholder_image = get_or_default("CAROUSEL_PLACEHOLDER_IMAGE", PLACEHOLDER_IMAGE);
        parse_url("CAROUSEL_PLACEHOLDER_IMAGE", &placeholder_image)?;
        let product_url_base = get_or_default("CAROUSEL_PRODUCT_URL_BASE", PRODUCT_URL_BASE);
        parse_url("CAROUSEL_PRODUCT_URL_BASE", &product_url_base)?;

        Ok(Self {
            source_url,
            data_dir,
            viewport_width,
            fallbacks: Fallbacks {
                placeholder_image,
                product_url_base,
            },
        })
    }

    /// Card density for the configured viewport.
    #[must_use]
    pub const fn products_per_view(&self) -> ProductsPerView {
        ProductsPerView::for_viewport_width(self.viewport_width)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an absolute http(s) URL.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}
