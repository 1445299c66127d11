//! Load the carousel and print it.

use std::fmt::Write as _;

use carousel::{CAROUSEL_TITLE, CarouselConfig, CarouselState, LoadOutcome, ProductsPerView, Slide};
use tracing::{info, warn};

use super::CommandError;

/// Flags for `carousel show`.
#[derive(Debug, Clone, Copy)]
pub struct ShowOptions {
    pub steps: u32,
    pub back: u32,
    pub width: Option<u32>,
    pub json: bool,
}

/// Load, slide as requested, and print the resulting state.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the data directory
/// cannot be opened. A failed load still prints an empty carousel.
pub async fn run(options: ShowOptions) -> Result<(), CommandError> {
    let config = CarouselConfig::from_env()?;
    let products_per_view = options.width.map_or_else(
        || config.products_per_view(),
        ProductsPerView::for_viewport_width,
    );
    let mut controller = super::controller(&config, products_per_view)?;

    match controller.load().await {
        LoadOutcome::Cached => info!("Loaded products from cache"),
        LoadOutcome::Fetched => info!(url = %config.source_url, "Fetched products"),
        LoadOutcome::Failed => warn!("Load failed, showing an empty carousel"),
    }

    for _ in 0..options.steps {
        if controller.next() == Slide::Blocked {
            break;
        }
    }
    for _ in 0..options.back {
        if controller.prev() == Slide::Blocked {
            break;
        }
    }

    let output = if options.json {
        serde_json::to_string_pretty(controller.state())?
    } else {
        render(controller.state())
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }

    Ok(())
}

/// Plain-text view of the carousel.
///
/// Visible cards are marked with `>`, favorites with `*`.
pub fn render(state: &CarouselState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{CAROUSEL_TITLE}");

    if state.products.is_empty() {
        let _ = writeln!(out, "  (no products)");
        return out;
    }

    let start = usize::try_from(-i64::from(state.current_position)).unwrap_or(0);
    let visible = state.visible_products().len();

    for (index, product) in state.products.iter().enumerate() {
        let marker = if (start..start + visible).contains(&index) {
            '>'
        } else {
            ' '
        };
        let heart = if product.is_favorite { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}{heart} [{}] {} | {} | {}",
            product.id, product.name, product.price, product.url
        );
    }

    let _ = write!(
        out,
        "position {} of {} ({} per view, offset {:.2}%)",
        state.current_position,
        state.products.len(),
        state.products_per_view,
        state.offset_percent()
    );
    out
}

#[cfg(test)]
mod tests {
    use carousel::{Product, ProductId};

    use super::*;

    fn product(id: i64, is_favorite: bool) -> Product {
        Product {
            id: ProductId::Number(id),
            name: format!("Item {id}"),
            price: "10,00 TRY".to_string(),
            image: "https://cdn.example/i.png".to_string(),
            url: format!("https://shop.example/p/{id}"),
            is_favorite,
        }
    }

    fn state(count: i64, current_position: i32, products_per_view: f64) -> CarouselState {
        CarouselState {
            products: (1..=count).map(|id| product(id, id == 2)).collect(),
            current_position,
            products_per_view,
        }
    }

    #[test]
    fn test_render_empty() {
        let out = render(&state(0, 0, 6.5));
        assert_eq!(out, "You Might Also Like\n  (no products)\n");
    }

    #[test]
    fn test_render_marks_visible_and_favorites() {
        let out = render(&state(4, -1, 1.5));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("   [1] Item 1"));
        assert!(lines[2].starts_with(">* [2] Item 2 | 10,00 TRY"));
        assert!(lines[3].starts_with(">  [3]"));
        assert!(lines[4].starts_with("   [4]"));
        assert!(lines[5].starts_with("position -1 of 4 (1.5 per view"));
    }
}
