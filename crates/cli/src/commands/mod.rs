//! Subcommand implementations.

use carousel::{
    CarouselConfig, CarouselController, ConfigError, FileStore, HttpProductSource,
    ProductsPerView, StorageError,
};
use thiserror::Error;

pub mod cache;
pub mod favorite;
pub mod show;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Invalid environment configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The data directory could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The render state could not be encoded.
    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Controller wired to the configured data directory and remote document.
pub type Controller = CarouselController<FileStore, HttpProductSource>;

/// Build a controller from `config`, using `products_per_view` for density.
///
/// # Errors
///
/// Returns `CommandError::Storage` if the data directory cannot be created.
pub fn controller(
    config: &CarouselConfig,
    products_per_view: ProductsPerView,
) -> Result<Controller, CommandError> {
    let store = FileStore::open(config.data_dir.clone())?;
    let source = HttpProductSource::new(config.source_url.clone());
    Ok(CarouselController::new(store, source, products_per_view)
        .with_fallbacks(config.fallbacks.clone()))
}
