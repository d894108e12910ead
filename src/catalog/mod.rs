//! Catalog core: products, actions, the reducer and the store
//!
//! All state transitions are synchronous and pure. The store holds the
//! current snapshot; views read it and dispatch [`Action`]s.
//!
//! ```text
//!  view ──dispatch(Action)──▶ Store ──reduce()──▶ new Catalog
//!    ▲                                                │
//!    └──────────── subscribers notified ◀─────────────┘
//! ```

mod action;
mod ids;
mod product;
mod reducer;
mod store;

pub use action::Action;
pub use ids::{IdSource, SequentialIds};
pub use product::{Product, ProductDraft, ProductId, DEFAULT_THUMBNAIL};
pub use reducer::{reduce, Catalog};
pub use store::{Store, SubscriptionId};
