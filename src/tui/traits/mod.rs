//! Component trait system for the TUI
//!
//! Panels declare their own capabilities instead of App knowing how to
//! render and drive every one of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (routes keys, turns intents into store actions)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌──────────────┬──────┴───────┬──────────────┐
//!        ▼              ▼              ▼              ▼
//!   ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌─────────┐
//!   │ Product │   │  Create  │   │   Edit   │   │  Logs   │
//!   │  List   │   │   Form   │   │   Form   │   │  Panel  │
//!   └─────────┘   └──────────┘   └──────────┘   └─────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Interactive`] - keyboard handling, may emit an [`Intent`]

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Intent, Interactive};
