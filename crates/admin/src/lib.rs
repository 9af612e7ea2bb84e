//! Tienda Costa Admin library.
//!
//! This crate provides the admin panel as a library, allowing it to be tested
//! and reused. The panel manages the orders and products of the store API and
//! renders QR codes and barcodes for orders.
//!
//! # Modules
//!
//! - [`api`] - Store API client
//! - [`codes`] - QR and CODE128 symbol rendering
//! - [`views`] - Per-view state and controllers
//! - [`routes`] - HTTP handlers and templates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod codes;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
pub mod views;
