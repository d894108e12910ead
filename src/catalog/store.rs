// Catalog store - single source of truth for the product snapshot
//
// The store is constructed explicitly and handed to whoever needs it (the TUI
// app, the apply command). Every dispatch runs the reducer, swaps in the new
// snapshot and notifies subscribers in the order they subscribed.

use super::action::Action;
use super::reducer::{reduce, Catalog};

/// Handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Catalog)>;

pub struct Store {
    state: Catalog,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    /// Number of dispatches processed so far
    revision: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(Catalog::new())
    }

    pub fn with_state(state: Catalog) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &Catalog {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run an action through the reducer and notify subscribers
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action);

        if matches!(action, Action::Update(_) | Action::Delete(_)) && next == self.state {
            if let Some(id) = action.target().filter(|id| !self.state.contains(*id)) {
                tracing::debug!("{}: no product with id {}", action.kind(), id);
            }
        }

        self.state = next;
        self.revision += 1;

        tracing::debug!(
            action = action.kind(),
            target = ?action.target().map(|id| id.get()),
            products = self.state.len(),
            revision = self.revision,
            "dispatched"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener called after every dispatch
    pub fn subscribe(&mut self, listener: impl FnMut(&Catalog) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
