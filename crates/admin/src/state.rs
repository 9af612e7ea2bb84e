//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, StoreApiClient};
use crate::config::AdminConfig;
use crate::views::{OrdersView, ProductsView};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Each view controller owns its
/// own state; the only thing they share is the API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: StoreApiClient,
    orders: OrdersView,
    products: ProductsView,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store API client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let api = StoreApiClient::new(&config.api)?;
        let orders = OrdersView::new(api.clone());
        let products = ProductsView::new(api.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                orders,
                products,
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the store API client.
    #[must_use]
    pub fn api(&self) -> &StoreApiClient {
        &self.inner.api
    }

    /// Get the orders view controller.
    #[must_use]
    pub fn orders(&self) -> &OrdersView {
        &self.inner.orders
    }

    /// Get the products view controller.
    #[must_use]
    pub fn products(&self) -> &ProductsView {
        &self.inner.products
    }
}
