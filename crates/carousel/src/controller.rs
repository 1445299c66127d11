//! The carousel state machine.
//!
//! [`CarouselController`] owns the product list, the slide position and the
//! card density. It is the only place state changes:
//!
//! - [`load`](CarouselController::load) fills `products` from the cache or the
//!   remote source and resets the position.
//! - [`next`](CarouselController::next) / [`prev`](CarouselController::prev)
//!   move the visible window one card at a time within bounds.
//! - [`toggle_favorite`](CarouselController::toggle_favorite) flips one id in
//!   the stored favorite set and re-derives every `is_favorite` flag.
//!
//! Mutations write through to the store before they are committed in memory.
//! No operation returns an error: I/O failures are logged and the controller
//! falls back to an empty carousel or its previous state.
//!
//! # Example
//!
//! ```rust,ignore
//! use carousel::{CarouselController, HttpProductSource, MemoryStore, ProductsPerView};
//!
//! let source = HttpProductSource::new(config.source_url.clone());
//! let mut carousel = CarouselController::new(MemoryStore::new(), source, ProductsPerView::DESKTOP);
//!
//! carousel.load().await;
//! carousel.next();
//! carousel.toggle_favorite(&ProductId::Number(1));
//! ```

use carousel_core::{FavoriteSet, Product, ProductId};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::density::ProductsPerView;
use crate::error::LoadError;
use crate::favorites;
use crate::normalize::{Fallbacks, normalize, normalize_cached};
use crate::source::ProductSource;
use crate::store::{CarouselStore, KeyValueStore};

/// Heading shown above the carousel.
pub const CAROUSEL_TITLE: &str = "You Might Also Like";

/// Everything a view needs to render the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub products: Vec<Product>,
    /// Zero or negative; `-n` means the first `n` cards have scrolled out on
    /// the leading edge.
    pub current_position: i32,
    pub products_per_view: f64,
}

impl CarouselState {
    fn empty(products_per_view: ProductsPerView) -> Self {
        Self {
            products: Vec::new(),
            current_position: 0,
            products_per_view: products_per_view.get(),
        }
    }

    /// Horizontal track offset as a percentage of the viewport.
    #[must_use]
    pub fn offset_percent(&self) -> f64 {
        f64::from(self.current_position) * (100.0 / self.products_per_view)
    }

    /// Threshold the position must stay strictly above for `next` to move.
    ///
    /// Fractional by design; positive when there are fewer products than
    /// fit in the view.
    #[must_use]
    pub fn advance_threshold(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)] // product lists are far below 2^52
        let len = self.products.len() as f64;
        -(len - self.products_per_view)
    }

    /// Whether `next` would move.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        f64::from(self.current_position) > self.advance_threshold()
    }

    /// Whether `prev` would move.
    #[must_use]
    pub const fn can_rewind(&self) -> bool {
        self.current_position < 0
    }

    /// Cards at least partly inside the viewport.
    #[must_use]
    pub fn visible_products(&self) -> &[Product] {
        let start = usize::try_from(-i64::from(self.current_position)).unwrap_or(0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // positive, small
        let count = self.products_per_view.ceil() as usize;
        let end = start.saturating_add(count).min(self.products.len());
        self.products.get(start..end).unwrap_or(&[])
    }
}

/// Where `load` got its products from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Reused the cached product list.
    Cached,
    /// Fetched and normalized the remote document.
    Fetched,
    /// Something failed; the carousel is empty.
    Failed,
}

/// Result of a slide intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Moved; carries the new position.
    Moved(i32),
    /// Already at the boundary; nothing changed.
    Blocked,
}

/// Carousel state machine over a store `S` and a product source `R`.
pub struct CarouselController<S, R> {
    store: CarouselStore<S>,
    source: R,
    fallbacks: Fallbacks,
    state: CarouselState,
}

impl<S: KeyValueStore, R: ProductSource> CarouselController<S, R> {
    /// Create an empty controller. Call [`load`](Self::load) before
    /// dispatching any intent.
    #[must_use]
    pub fn new(store: S, source: R, products_per_view: ProductsPerView) -> Self {
        Self {
            store: CarouselStore::new(store),
            source,
            fallbacks: Fallbacks::default(),
            state: CarouselState::empty(products_per_view),
        }
    }

    /// Replace the values used for missing product fields.
    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Populate products from the cache, or from the source on a cold cache.
    ///
    /// The position always resets to 0. On any fetch or write failure the
    /// carousel is left empty and [`LoadOutcome::Failed`] is returned.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> LoadOutcome {
        self.state.current_position = 0;

        match self.try_load().await {
            Ok((outcome, products)) => {
                info!(count = products.len(), outcome = ?outcome, "Carousel loaded");
                self.state.products = products;
                outcome
            }
            Err(e) => {
                error!(error = %e, "Error loading products");
                self.state.products = Vec::new();
                LoadOutcome::Failed
            }
        }
    }

    async fn try_load(&self) -> Result<(LoadOutcome, Vec<Product>), LoadError> {
        let favorites = self.stored_favorites();

        let (outcome, products) = match self.store.read_products() {
            Ok(Some(cached)) => {
                debug!(count = cached.len(), "Cache hit for products");
                let products: Vec<Product> = cached.into_iter().map(normalize_cached).collect();
                (LoadOutcome::Cached, products)
            }
            Ok(None) => {
                debug!("Cache miss for products");
                (LoadOutcome::Fetched, self.fetch_and_cache(&favorites).await?)
            }
            Err(e) => {
                warn!(error = %e, "Cached products unreadable, treating as cache miss");
                (LoadOutcome::Fetched, self.fetch_and_cache(&favorites).await?)
            }
        };

        let products = favorites::apply_favorites(products, &favorites);
        self.store.write_products(&products)?;
        self.store.write_favorites(&favorites)?;

        Ok((outcome, products))
    }

    async fn fetch_and_cache(&self, favorites: &FavoriteSet) -> Result<Vec<Product>, LoadError> {
        let raw = self.source.fetch().await?;
        let products: Vec<Product> = raw
            .into_iter()
            .map(|item| normalize(item, favorites, &self.fallbacks))
            .collect();
        self.store.write_products(&products)?;
        Ok(products)
    }

    /// Move the window one card toward the end.
    ///
    /// Moves only while the current position is strictly greater than
    /// `-(len - products_per_view)`, so the last step may overshoot a
    /// fractional threshold by less than one card.
    pub fn next(&mut self) -> Slide {
        if !self.state.can_advance() {
            return Slide::Blocked;
        }
        self.state.current_position -= 1;
        Slide::Moved(self.state.current_position)
    }

    /// Move the window one card toward the start.
    pub fn prev(&mut self) -> Slide {
        if !self.state.can_rewind() {
            return Slide::Blocked;
        }
        self.state.current_position += 1;
        Slide::Moved(self.state.current_position)
    }

    /// Flip `id` in the stored favorite set and return the updated products.
    ///
    /// The favorite set is re-read from the store rather than derived from
    /// the in-memory products. If either write fails nothing is committed.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn toggle_favorite(&mut self, id: &ProductId) -> &[Product] {
        let favorites = favorites::toggle_favorite(&self.stored_favorites(), id);
        let products = favorites::apply_favorites(self.state.products.clone(), &favorites);

        let written = self
            .store
            .write_products(&products)
            .and_then(|()| self.store.write_favorites(&favorites));

        match written {
            Ok(()) => {
                debug!(is_favorite = favorites.contains(id), "Favorite toggled");
                self.state.products = products;
            }
            Err(e) => error!(error = %e, "Failed to persist favorite toggle"),
        }

        &self.state.products
    }

    fn stored_favorites(&self) -> FavoriteSet {
        self.store.read_favorites().unwrap_or_else(|e| {
            warn!(error = %e, "Stored favorites unreadable, starting empty");
            FavoriteSet::new()
        })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    #[must_use]
    pub const fn current_position(&self) -> i32 {
        self.state.current_position
    }

    #[must_use]
    pub const fn products_per_view(&self) -> f64 {
        self.state.products_per_view
    }

    /// Current render state.
    #[must_use]
    pub const fn state(&self) -> &CarouselState {
        &self.state
    }

    /// See [`CarouselState::offset_percent`].
    #[must_use]
    pub fn offset_percent(&self) -> f64 {
        self.state.offset_percent()
    }

    /// Get a reference to the typed store.
    #[must_use]
    pub const fn store(&self) -> &CarouselStore<S> {
        &self.store
    }
}
