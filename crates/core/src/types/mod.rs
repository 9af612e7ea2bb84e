//! Core types for Tienda Costa.
//!
//! Entities mirror the JSON records served by the store API. Forms mirror the
//! HTML forms of the admin panel and are submitted to the API unchanged.

pub mod form;
pub mod id;
pub mod lenient;
pub mod order;
pub mod price;
pub mod product;

pub use form::FormRecord;
pub use id::{Entity, EntityId};
pub use order::{Order, OrderForm};
pub use price::format_price;
pub use product::{Product, ProductForm};
