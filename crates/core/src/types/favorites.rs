//! The set of favorited product ids.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Favorited product ids.
///
/// Persisted as a JSON array, but only membership carries meaning. Building a
/// set from a sequence drops repeated ids (the first occurrence is kept), so a
/// hand-edited or legacy record with duplicates still behaves as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ProductId>", into = "Vec<ProductId>")]
pub struct FavoriteSet(Vec<ProductId>);

impl FavoriteSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.0.contains(id)
    }

    /// Position of `id` in storage order.
    #[must_use]
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == id)
    }

    /// Append `id` unless already present.
    pub fn insert(&mut self, id: ProductId) {
        if !self.contains(&id) {
            self.0.push(id);
        }
    }

    /// Remove `id`, keeping the order of the remaining ids. Returns whether it
    /// was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.0.remove(index);
        true
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.0.iter()
    }
}

impl From<Vec<ProductId>> for FavoriteSet {
    fn from(ids: Vec<ProductId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FavoriteSet> for Vec<ProductId> {
    fn from(set: FavoriteSet) -> Self {
        set.0
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: FavoriteSet = serde_json::from_str(r#"[1, 2, 1, "a", "a"]"#).unwrap();
        let ids: Vec<_> = set.iter().cloned().collect();
        assert_eq!(
            ids,
            vec![
                ProductId::Number(1),
                ProductId::Number(2),
                ProductId::from("a")
            ]
        );
    }

    #[test]
    fn test_serialize_as_array() {
        let set: FavoriteSet = vec![ProductId::Number(3), ProductId::from("x")].into();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"[3,"x"]"#);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = FavoriteSet::new();
        set.insert(ProductId::Number(1));
        set.insert(ProductId::Number(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut set: FavoriteSet = vec![
            ProductId::Number(1),
            ProductId::Number(2),
            ProductId::Number(3),
        ]
        .into();
        assert!(set.remove(&ProductId::Number(2)));
        assert!(!set.remove(&ProductId::Number(2)));
        let ids: Vec<_> = set.iter().cloned().collect();
        assert_eq!(ids, vec![ProductId::Number(1), ProductId::Number(3)]);
    }
}
