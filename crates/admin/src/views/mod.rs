//! View controllers for the two management views.
//!
//! Each controller owns its own [`ViewStore`] and talks to the store API
//! directly. Controllers never share state with each other.
//!
//! # Synchronization policy
//!
//! Every successful mutation is followed by a full re-fetch of the list; the
//! local list is never patched. Failures are logged and otherwise ignored:
//! the list and form simply stay as they were.

pub mod orders;
pub mod products;
pub mod store;

pub use orders::{OrderEntry, OrderSymbols, OrdersView};
pub use products::ProductsView;
pub use store::{Phase, ViewStore};
