//! Persistent storage for the carousel.
//!
//! # Slots
//!
//! Two named records survive across sessions:
//!
//! - `carouselProducts` - JSON array of normalized [`Product`]s
//! - `favoriteProducts` - JSON array of favorited product ids
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, for tests and ephemeral use
//! - [`FileStore`] - one JSON file per slot, replaced atomically on write
//!
//! Every write replaces a whole record; a reader never observes a partially
//! written one.

mod file;
mod memory;

use std::sync::Arc;

use carousel_core::{FavoriteSet, Product};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Slot holding the cached product list.
pub const PRODUCTS_KEY: &str = "carouselProducts";

/// Slot holding the favorite id set.
pub const FAVORITES_KEY: &str = "favoriteProducts";

/// Durable string key-value storage.
///
/// Methods take `&self`: backends use interior mutability, mirroring browser
/// storage where any holder may read or write.
pub trait KeyValueStore {
    /// Read the raw record under `key`, `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the record under `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record under `key`. Deleting an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Typed accessors for the carousel's two slots.
///
/// No validation happens here: records are serialized and parsed as-is, and a
/// malformed record surfaces as [`StorageError::Malformed`].
#[derive(Debug, Clone)]
pub struct CarouselStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CarouselStore<S> {
    /// Wrap a key-value backend.
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read the cached product list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if the record does not parse.
    pub fn read_products(&self) -> Result<Option<Vec<Product>>, StorageError> {
        self.read_json(PRODUCTS_KEY)
    }

    /// Replace the cached product list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn write_products(&self, products: &[Product]) -> Result<(), StorageError> {
        self.write_json(PRODUCTS_KEY, products)
    }

    /// Drop the cached product list so the next load fetches again.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn clear_products(&self) -> Result<(), StorageError> {
        self.backend.remove(PRODUCTS_KEY)
    }

    /// Read the favorite set, empty if never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` if the record does not parse.
    pub fn read_favorites(&self) -> Result<FavoriteSet, StorageError> {
        Ok(self.read_json(FAVORITES_KEY)?.unwrap_or_default())
    }

    /// Replace the favorite set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn write_favorites(&self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        self.write_json(FAVORITES_KEY, favorites)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StorageError> {
        self.backend
            .get(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| StorageError::Malformed { key, source })
            })
            .transpose()
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
        self.backend.set(key, &raw)
    }
}

/// Reject keys that could escape a backend's namespace (path separators,
/// dots, whitespace).
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
