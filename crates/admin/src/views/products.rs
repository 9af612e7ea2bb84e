//! Product view controller.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use tienda_costa_core::{EntityId, FormRecord, Product, ProductForm};

use super::store::{Phase, ViewStore};
use crate::api::StoreApiClient;

/// Controller for the products view.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ProductsView {
    inner: Arc<ProductsViewInner>,
}

struct ProductsViewInner {
    api: StoreApiClient,
    store: RwLock<ViewStore<Product, ProductForm>>,
}

impl ProductsView {
    #[must_use]
    pub fn new(api: StoreApiClient) -> Self {
        Self {
            inner: Arc::new(ProductsViewInner {
                api,
                store: RwLock::new(ViewStore::new()),
            }),
        }
    }

    /// Fetch the complete product list and replace the local snapshot.
    ///
    /// On failure the previous snapshot is kept. Returns whether the snapshot
    /// was replaced.
    #[instrument(skip(self))]
    pub async fn load_products(&self) -> bool {
        self.inner.store.write().await.begin_load();

        let result = self.inner.api.list_products().await;

        let mut store = self.inner.store.write().await;
        match result {
            Ok(products) => {
                info!(count = products.len(), "Products loaded");
                store.finish_load(Some(products));
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                store.finish_load(None);
                false
            }
        }
    }

    /// Submit the product form.
    ///
    /// Same contract as order creation: re-fetch and clear on success, keep
    /// the form on failure.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_product(&self, form: ProductForm) -> bool {
        self.inner.store.write().await.set_form(form.clone());

        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Product form incomplete, not submitted");
            return false;
        }

        if let Err(e) = self.inner.api.create_product(&form).await {
            error!(error = %e, "Failed to create product");
            return false;
        }

        info!("Product created");
        self.load_products().await;
        self.inner.store.write().await.reset_form();
        true
    }

    /// Delete a product by ID, then re-fetch the list.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &EntityId) -> bool {
        if let Err(e) = self.inner.api.delete_product(id).await {
            error!(error = %e, "Failed to delete product");
            return false;
        }

        info!("Product deleted");
        self.load_products().await;
        true
    }

    /// Current product snapshot.
    pub async fn products(&self) -> Vec<Product> {
        self.inner.store.read().await.items().to_vec()
    }

    /// Resolve a path segment to the ID of a listed product.
    pub async fn resolve_id(&self, raw: &str) -> EntityId {
        self.inner.store.read().await.resolve_id(raw)
    }

    /// Current form state.
    pub async fn form(&self) -> ProductForm {
        self.inner.store.read().await.form().clone()
    }

    /// Clear the form, as when the view is mounted again.
    pub async fn reset_form(&self) {
        self.inner.store.write().await.reset_form();
    }

    pub async fn phase(&self) -> Phase {
        self.inner.store.read().await.phase()
    }
}

impl std::fmt::Debug for ProductsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsView")
            .field("api", &self.inner.api)
            .finish_non_exhaustive()
    }
}
