//! Cache maintenance.

use carousel::{CarouselConfig, CarouselStore, FileStore};
use tracing::info;

use super::CommandError;

/// Remove the cached product list so the next load fetches again.
///
/// Favorites are left untouched.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the record cannot be
/// removed.
pub fn clear() -> Result<(), CommandError> {
    let config = CarouselConfig::from_env()?;
    let store = CarouselStore::new(FileStore::open(config.data_dir.clone())?);
    store.clear_products()?;

    info!(dir = %config.data_dir.display(), "Product cache cleared");
    Ok(())
}
