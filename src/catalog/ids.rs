// Product id generation
//
// Ids come from a monotonic counter rather than the wall clock, so two
// products created in the same instant still get distinct ids.

use super::product::ProductId;

/// Source of fresh product ids
pub trait IdSource {
    fn next_id(&mut self) -> ProductId;

    /// Account for an id that entered the catalog from elsewhere
    fn observe(&mut self, _id: ProductId) {}
}

/// Monotonic counter, first id is 1 unless seeded otherwise
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// The id the next call to `next_id` will return
    #[cfg(test)]
    pub fn peek(&self) -> ProductId {
        ProductId(self.next)
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ProductId {
        let id = ProductId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, id: ProductId) {
        if id.get() >= self.next {
            self.next = id.get().saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert_eq!(a, ProductId(1));
        assert!(a < b && b < c);
    }

    #[test]
    fn observe_skips_past_foreign_ids() {
        let mut ids = SequentialIds::new();
        ids.observe(ProductId(40));
        assert_eq!(ids.peek(), ProductId(41));
        assert_eq!(ids.next_id(), ProductId(41));

        // Lower ids don't rewind the counter
        ids.observe(ProductId(3));
        assert_eq!(ids.next_id(), ProductId(42));
    }
}
