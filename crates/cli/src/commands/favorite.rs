//! Toggle a product's favorite flag.

use carousel::{CarouselConfig, ProductId};
use tracing::info;

use super::CommandError;

/// Load the carousel, toggle `id`, and report its new state.
///
/// The id does not need to be among the loaded products; it is recorded in
/// the favorite set either way.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the data directory
/// cannot be opened.
pub async fn run(id: &str) -> Result<(), CommandError> {
    let config = CarouselConfig::from_env()?;
    let mut controller = super::controller(&config, config.products_per_view())?;
    controller.load().await;

    let id = ProductId::parse_lenient(id);
    controller.toggle_favorite(&id);

    let is_favorite = controller.store().read_favorites()?.contains(&id);
    info!(product_id = %id, is_favorite, "Favorite updated");

    #[allow(clippy::print_stdout)]
    {
        if is_favorite {
            println!("{id} added to favorites");
        } else {
            println!("{id} removed from favorites");
        }
    }

    Ok(())
}
