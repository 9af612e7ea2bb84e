//! Product endpoints.

use tracing::instrument;

use tienda_costa_core::{EntityId, Product, ProductForm};

use super::{ApiError, StoreApiClient};

const PRODUCTS_PATH: &str = "/api/products";

/// Path of a single product resource, with the ID percent-encoded.
fn product_path(id: &EntityId) -> String {
    format!(
        "{PRODUCTS_PATH}/{}",
        urlencoding::encode(&id.to_string())
    )
}

impl StoreApiClient {
    /// Fetch the complete product collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API answers non-2xx, or the
    /// body is not a JSON array. Array elements that are not products are
    /// skipped.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_records(PRODUCTS_PATH).await
    }

    /// Submit the product create form.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers non-2xx.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_product(&self, form: &ProductForm) -> Result<(), ApiError> {
        self.post_json(PRODUCTS_PATH, form).await
    }

    /// Delete a product. The ID travels in the request path.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers non-2xx.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &EntityId) -> Result<(), ApiError> {
        self.delete::<()>(&product_path(id), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path(&EntityId::from(42)), "/api/products/42");
        assert_eq!(
            product_path(&EntityId::from("a b/c")),
            "/api/products/a%20b%2Fc"
        );
    }
}
