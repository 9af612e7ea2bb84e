//! Order endpoints.

use serde::Serialize;
use tracing::instrument;

use tienda_costa_core::{EntityId, Order, OrderForm};

use super::{ApiError, StoreApiClient};

const ORDERS_PATH: &str = "/api/orders";
const CREATE_ORDER_PATH: &str = "/api/create-order";
const DELETE_ORDER_PATH: &str = "/api/order";

/// Body of the delete-order request.
#[derive(Debug, Serialize)]
struct DeleteOrderBody<'a> {
    id: &'a EntityId,
}

impl StoreApiClient {
    /// Fetch the complete order collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API answers non-2xx, or the
    /// body is not a JSON array. Array elements that are not orders are
    /// skipped.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_records(ORDERS_PATH).await
    }

    /// Submit the order create form.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers non-2xx.
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create_order(&self, form: &OrderForm) -> Result<(), ApiError> {
        self.post_json(CREATE_ORDER_PATH, form).await
    }

    /// Delete an order. The ID travels in the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers non-2xx.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete_order(&self, id: &EntityId) -> Result<(), ApiError> {
        self.delete(DELETE_ORDER_PATH, Some(&DeleteOrderBody { id }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_body_keeps_id_shape() {
        let id = EntityId::from(7);
        let body = serde_json::to_value(DeleteOrderBody { id: &id }).expect("serialize");
        assert_eq!(body, serde_json::json!({"id": 7}));

        let id = EntityId::from("ab12");
        let body = serde_json::to_value(DeleteOrderBody { id: &id }).expect("serialize");
        assert_eq!(body, serde_json::json!({"id": "ab12"}));
    }
}
