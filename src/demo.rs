// Demo mode: seed the catalog with sample products
//
// The products go through the store as ordinary Add actions with ids from
// the id source, so the TUI starts exactly as if a user had typed them in.
//
// Run with: CATALOG_DEMO=1 catalog   (or: catalog --demo)

use crate::catalog::{Action, IdSource, ProductDraft, Store};

/// (title, description, price)
const SAMPLES: &[(&str, &str, &str)] = &[
    ("Desk Lamp", "Adjustable LED lamp with warm and cool modes", "39.90"),
    ("Notebook", "A5 dotted notebook, 120 pages", "12.50"),
    ("Mechanical Keyboard", "Tenkeyless, hot-swappable switches", "129"),
    ("Coffee Mug", "Stoneware, 350 ml", "14"),
    ("Standing Desk", "Electric height adjustment, oak top", "549.00"),
];

/// Dispatch the sample products. Returns how many were added.
pub fn seed(store: &mut Store, ids: &mut impl IdSource, thumbnail: &str) -> usize {
    for (title, description, price) in SAMPLES {
        let product = ProductDraft::new(*title, *description, *price).into_product(ids.next_id(), thumbnail);
        store.dispatch(Action::add(product));
    }

    tracing::info!(products = SAMPLES.len(), "demo catalog seeded");
    SAMPLES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductId, SequentialIds, DEFAULT_THUMBNAIL};

    #[test]
    fn seeds_through_the_store_with_sequential_ids() {
        let mut store = Store::new();
        let mut ids = SequentialIds::new();

        let added = seed(&mut store, &mut ids, DEFAULT_THUMBNAIL);

        assert_eq!(added, SAMPLES.len());
        assert_eq!(store.revision(), SAMPLES.len() as u64);
        let products = store.state().products();
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[4].id, ProductId(5));
        assert!(products.iter().all(|p| p.thumbnail == DEFAULT_THUMBNAIL));
        assert_eq!(ids.peek(), ProductId(6));
    }
}
