// Pure state transitions: (previous snapshot, action) -> next snapshot

use super::action::Action;
use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Insertion-ordered product snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with the given id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }
}

/// Compute the next snapshot. Total: every action yields a catalog.
///
/// - `Add` appends without checking ids
/// - `Update` replaces every element whose id matches; no match is a no-op
/// - `Delete` drops every element whose id matches; no match is a no-op
/// - `Unknown` returns the state unchanged
pub fn reduce(state: &Catalog, action: &Action) -> Catalog {
    match action {
        Action::Add(product) => {
            let mut products = Vec::with_capacity(state.products.len() + 1);
            products.extend(state.products.iter().cloned());
            products.push(product.clone());
            Catalog { products }
        }
        Action::Update(updated) => Catalog {
            products: state
                .products
                .iter()
                .map(|p| {
                    if p.id == updated.id {
                        updated.clone()
                    } else {
                        p.clone()
                    }
                })
                .collect(),
        },
        Action::Delete(id) => Catalog {
            products: state
                .products
                .iter()
                .filter(|p| p.id != *id)
                .cloned()
                .collect(),
        },
        Action::Unknown => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{ProductDraft, DEFAULT_THUMBNAIL};

    fn product(id: u64, title: &str) -> Product {
        ProductDraft::new(title, format!("{} description", title), "10")
            .into_product(ProductId(id), DEFAULT_THUMBNAIL)
    }

    fn sample() -> Catalog {
        Catalog::from_products(vec![product(1, "Pen"), product(2, "Ink"), product(3, "Pad")])
    }

    #[test]
    fn add_appends_and_preserves_prefix() {
        let state = sample();
        let next = reduce(&state, &Action::add(product(4, "Clip")));

        assert_eq!(next.len(), state.len() + 1);
        assert_eq!(next.products().last(), Some(&product(4, "Clip")));
        assert_eq!(&next.products()[..3], state.products());
    }

    #[test]
    fn add_does_not_deduplicate_ids() {
        let next = reduce(&sample(), &Action::add(product(1, "Twin")));
        assert_eq!(next.len(), 4);
        assert_eq!(next.iter().filter(|p| p.id == ProductId(1)).count(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let state = sample();
        let next = reduce(&state, &Action::update(product(2, "Black Ink")));

        assert_eq!(next.len(), state.len());
        assert_eq!(next.products()[1].title, "Black Ink");
        assert_eq!(next.products()[0], state.products()[0]);
        assert_eq!(next.products()[2], state.products()[2]);
    }

    #[test]
    fn update_replaces_every_duplicate() {
        let state = Catalog::from_products(vec![product(5, "A"), product(6, "B"), product(5, "C")]);
        let next = reduce(&state, &Action::update(product(5, "Z")));

        assert_eq!(next.products()[0].title, "Z");
        assert_eq!(next.products()[1].title, "B");
        assert_eq!(next.products()[2].title, "Z");
    }

    #[test]
    fn missing_id_is_a_silent_noop() {
        let state = sample();
        assert_eq!(reduce(&state, &Action::update(product(99, "Ghost"))), state);
        assert_eq!(reduce(&state, &Action::delete(99)), state);
    }

    #[test]
    fn delete_removes_and_keeps_order() {
        let state = sample();
        let next = reduce(&state, &Action::delete(2));

        assert_eq!(next.len(), state.len() - 1);
        assert!(!next.contains(ProductId(2)));
        let ids: Vec<u64> = next.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_is_idempotent() {
        let state = sample();
        let once = reduce(&state, &Action::delete(1));
        let twice = reduce(&once, &Action::delete(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_leaves_state_unchanged() {
        let state = sample();
        assert_eq!(reduce(&state, &Action::Unknown), state);
    }

    #[test]
    fn add_update_delete_end_to_end() {
        let pen = Product {
            id: ProductId(1),
            title: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: "2".to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
        };

        let state = reduce(&Catalog::new(), &Action::add(pen.clone()));
        assert_eq!(state.products(), &[pen.clone()]);

        let gel = Product {
            title: "Gel Pen".to_string(),
            ..pen
        };
        let state = reduce(&state, &Action::update(gel));
        assert_eq!(state.products()[0].title, "Gel Pen");

        let state = reduce(&state, &Action::delete(1));
        assert!(state.is_empty());
    }
}
