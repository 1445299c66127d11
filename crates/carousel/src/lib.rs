//! Product recommendation carousel.
//!
//! The state machine behind an inline "You Might Also Like" carousel on a
//! product-detail page: it loads product cards from a cache or a remote
//! document, keeps favorite flags in sync with a persisted favorite set, and
//! tracks the slide position within fractional bounds.
//!
//! # Architecture
//!
//! - [`store`] - Key-value persistence and typed access to the two records
//! - [`source`] - Remote product document (`reqwest`)
//! - [`normalize`] - Raw and cached record normalization
//! - [`favorites`] - Favorite reconciliation
//! - [`controller`] - The state machine: `load`, `next`, `prev`, `toggle_favorite`
//! - [`density`] - Cards per view by viewport width
//! - [`config`] - Environment configuration
//!
//! Rendering is left to the caller, which reads [`CarouselState`] and sends
//! intents back to the [`CarouselController`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod density;
pub mod error;
pub mod favorites;
pub mod normalize;
pub mod source;
pub mod store;

pub use config::{CarouselConfig, ConfigError};
pub use controller::{CAROUSEL_TITLE, CarouselController, CarouselState, LoadOutcome, Slide};
pub use density::ProductsPerView;
pub use error::{FetchError, LoadError, StorageError};
pub use normalize::{Fallbacks, NormalizationGap};
pub use source::{HttpProductSource, ProductSource, RawProduct, parse_document};
pub use store::{CarouselStore, FileStore, KeyValueStore, MemoryStore};

pub use carousel_core::{FavoriteSet, Product, ProductId};
