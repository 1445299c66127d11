//! Favorite reconciliation.
//!
//! The stored [`FavoriteSet`] is the only source of truth for favorites;
//! `Product::is_favorite` is always recomputed from it.

use carousel_core::{FavoriteSet, Product, ProductId};

/// Set each product's `is_favorite` from membership in `favorites`.
///
/// Keeps length and order.
#[must_use]
pub fn apply_favorites(products: Vec<Product>, favorites: &FavoriteSet) -> Vec<Product> {
    products
        .into_iter()
        .map(|mut product| {
            product.is_favorite = favorites.contains(&product.id);
            product
        })
        .collect()
}

/// Remove `id` if present, append it otherwise.
#[must_use]
pub fn toggle_favorite(favorites: &FavoriteSet, id: &ProductId) -> FavoriteSet {
    let mut next = favorites.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, is_favorite: bool) -> Product {
        Product {
            id,
            name: String::new(),
            price: "0,00 TRY".to_string(),
            image: String::new(),
            url: String::new(),
            is_favorite,
        }
    }

    fn ids(set: &FavoriteSet) -> Vec<ProductId> {
        set.iter().cloned().collect()
    }

    #[test]
    fn test_apply_favorites_sets_flags() {
        let products = vec![
            product(ProductId::Number(1), true),
            product(ProductId::Number(2), false),
            product(ProductId::from("3"), false),
        ];
        let favorites: FavoriteSet = vec![ProductId::Number(2), ProductId::from("3")].into();

        let result = apply_favorites(products, &favorites);

        let flags: Vec<_> = result.iter().map(|p| p.is_favorite).collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn test_apply_favorites_preserves_length_and_order() {
        let products: Vec<_> = (0..20)
            .rev()
            .map(|i| product(ProductId::Number(i), i % 3 == 0))
            .collect();
        let favorites: FavoriteSet = (0..20)
            .filter(|i| i % 2 == 0)
            .map(ProductId::Number)
            .collect();

        let result = apply_favorites(products.clone(), &favorites);

        assert_eq!(result.len(), products.len());
        for (before, after) in products.iter().zip(&result) {
            assert_eq!(before.id, after.id);
            assert_eq!(after.is_favorite, favorites.contains(&after.id));
        }
    }

    #[test]
    fn test_apply_favorites_empty_inputs() {
        assert!(apply_favorites(Vec::new(), &FavoriteSet::new()).is_empty());

        let result = apply_favorites(
            vec![product(ProductId::Number(1), true)],
            &FavoriteSet::new(),
        );
        assert!(!result[0].is_favorite);
    }

    #[test]
    fn test_toggle_appends_absent() {
        let favorites: FavoriteSet = vec![ProductId::Number(1)].into();
        let next = toggle_favorite(&favorites, &ProductId::Number(5));
        assert_eq!(ids(&next), vec![ProductId::Number(1), ProductId::Number(5)]);
    }

    #[test]
    fn test_toggle_removes_present_in_place() {
        let favorites: FavoriteSet = vec![
            ProductId::Number(1),
            ProductId::Number(2),
            ProductId::Number(3),
        ]
        .into();
        let next = toggle_favorite(&favorites, &ProductId::Number(2));
        assert_eq!(ids(&next), vec![ProductId::Number(1), ProductId::Number(3)]);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let favorites: FavoriteSet = vec![ProductId::Number(7), ProductId::from("x")].into();
        for id in [
            ProductId::Number(7),
            ProductId::from("x"),
            ProductId::Number(99),
        ] {
            let twice = toggle_favorite(&toggle_favorite(&favorites, &id), &id);
            let mut expected = ids(&favorites);
            let mut actual = ids(&twice);
            expected.sort_by_key(ToString::to_string);
            actual.sort_by_key(ToString::to_string);
            assert_eq!(actual, expected, "toggle twice changed the set for {id}");
        }
    }

    #[test]
    fn test_repeated_toggles_never_duplicate() {
        let id = ProductId::Number(1);
        let mut favorites = FavoriteSet::new();
        for _ in 0..7 {
            favorites = toggle_favorite(&favorites, &id);
            assert!(favorites.len() <= 1);
        }
        assert!(favorites.contains(&id));
    }
}
