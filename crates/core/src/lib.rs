//! Tienda Costa Core - Shared types library.
//!
//! This crate provides the types shared by the admin panel and its tests:
//! - `admin` - Server-rendered administration panel for orders and products
//! - `integration-tests` - Mock store API and end-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! Every entity here is a disposable copy of a record owned by the remote
//! store API.
//!
//! # Modules
//!
//! - [`types`] - Entity IDs, orders, products and their create forms

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
