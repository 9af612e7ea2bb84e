//! Order view controller.
//!
//! Besides the list/create/delete cycle, the order view attaches a QR symbol
//! (customer name, address and phone) and a CODE128 barcode (order ID) to
//! every listed order.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use tienda_costa_core::{EntityId, FormRecord, Order, OrderForm};

use super::store::{Phase, ViewStore};
use crate::api::StoreApiClient;
use crate::codes::{self, Symbol};

const SYMBOL_CACHE_CAPACITY: u64 = 10_000;
const SYMBOL_CACHE_IDLE: Duration = Duration::from_secs(60 * 60);

/// Symbols rendered for one order.
///
/// Either symbol is `None` only if its payload could not be encoded.
#[derive(Debug, Clone)]
pub struct OrderSymbols {
    /// Payload the QR symbol was rendered from, used to detect changes.
    qr_payload: String,
    pub qr: Option<Symbol>,
    pub barcode: Option<Symbol>,
}

impl OrderSymbols {
    fn render(order: &Order) -> Self {
        let qr_payload = order.qr_payload();

        let qr = codes::render_qr(&qr_payload)
            .inspect_err(|e| warn!(order_id = %order.id, error = %e, "QR symbol not rendered"))
            .ok();
        let barcode = codes::render_code128(&order.barcode_payload())
            .inspect_err(|e| warn!(order_id = %order.id, error = %e, "Barcode not rendered"))
            .ok();

        Self {
            qr_payload,
            qr,
            barcode,
        }
    }
}

/// An order paired with its symbols.
#[derive(Debug, Clone)]
pub struct OrderEntry {
    pub order: Order,
    pub symbols: Arc<OrderSymbols>,
}

/// Controller for the orders view.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct OrdersView {
    inner: Arc<OrdersViewInner>,
}

struct OrdersViewInner {
    api: StoreApiClient,
    store: RwLock<ViewStore<Order, OrderForm>>,
    /// Rendered symbols keyed by order ID.
    symbols: Cache<EntityId, Arc<OrderSymbols>>,
}

impl OrdersView {
    #[must_use]
    pub fn new(api: StoreApiClient) -> Self {
        let symbols = Cache::builder()
            .max_capacity(SYMBOL_CACHE_CAPACITY)
            .time_to_idle(SYMBOL_CACHE_IDLE)
            .build();

        Self {
            inner: Arc::new(OrdersViewInner {
                api,
                store: RwLock::new(ViewStore::new()),
                symbols,
            }),
        }
    }

    /// Fetch the complete order list and replace the local snapshot.
    ///
    /// On failure the previous snapshot is kept. Returns whether the snapshot
    /// was replaced.
    #[instrument(skip(self))]
    pub async fn load_orders(&self) -> bool {
        self.inner.store.write().await.begin_load();

        // The lock is not held across the request.
        let result = self.inner.api.list_orders().await;

        let mut store = self.inner.store.write().await;
        match result {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                store.finish_load(Some(orders));
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load orders");
                store.finish_load(None);
                false
            }
        }
    }

    /// Submit the order form.
    ///
    /// The submitted values become the view's form state. On success the list
    /// is re-fetched and the form is cleared; on failure the form is kept.
    /// Returns whether the API accepted the order.
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create_order(&self, form: OrderForm) -> bool {
        self.inner.store.write().await.set_form(form.clone());

        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Order form incomplete, not submitted");
            return false;
        }

        if let Err(e) = self.inner.api.create_order(&form).await {
            error!(error = %e, "Failed to create order");
            return false;
        }

        info!("Order created");
        self.load_orders().await;
        self.inner.store.write().await.reset_form();
        true
    }

    /// Delete an order, then re-fetch the list.
    ///
    /// On failure the list is left as-is, including the entry that was meant
    /// to go. Returns whether the API accepted the deletion.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete_order(&self, id: &EntityId) -> bool {
        if let Err(e) = self.inner.api.delete_order(id).await {
            error!(error = %e, "Failed to delete order");
            return false;
        }

        info!("Order deleted");
        self.inner.symbols.invalidate(id).await;
        self.load_orders().await;
        true
    }

    /// Current order snapshot.
    pub async fn orders(&self) -> Vec<Order> {
        self.inner.store.read().await.items().to_vec()
    }

    /// Resolve a path segment to the ID of a listed order.
    pub async fn resolve_id(&self, raw: &str) -> EntityId {
        self.inner.store.read().await.resolve_id(raw)
    }

    /// Current form state.
    pub async fn form(&self) -> OrderForm {
        self.inner.store.read().await.form().clone()
    }

    /// Clear the form, as when the view is mounted again.
    pub async fn reset_form(&self) {
        self.inner.store.write().await.reset_form();
    }

    pub async fn phase(&self) -> Phase {
        self.inner.store.read().await.phase()
    }

    /// Current snapshot with one QR symbol and one barcode per order.
    ///
    /// Symbols are rendered once per order ID and reused until the QR payload
    /// of that order changes.
    pub async fn entries(&self) -> Vec<OrderEntry> {
        let orders = self.orders().await;
        let mut entries = Vec::with_capacity(orders.len());

        for order in orders {
            let symbols = self.symbols_for(&order).await;
            entries.push(OrderEntry { order, symbols });
        }

        entries
    }

    async fn symbols_for(&self, order: &Order) -> Arc<OrderSymbols> {
        if let Some(cached) = self.inner.symbols.get(&order.id).await {
            if cached.qr_payload == order.qr_payload() {
                return cached;
            }
        }

        let symbols = Arc::new(OrderSymbols::render(order));
        self.inner
            .symbols
            .insert(order.id.clone(), Arc::clone(&symbols))
            .await;
        symbols
    }
}

impl std::fmt::Debug for OrdersView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersView")
            .field("api", &self.inner.api)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::codes::SymbolKind;

    fn order(id: i64, name: &str) -> Order {
        Order {
            id: EntityId::from(id),
            title: "Lamp".to_string(),
            quantity: 1,
            unit_price: Decimal::ONE,
            address: "123 St".to_string(),
            customer_name: name.to_string(),
            email: "a@x.com".to_string(),
            product: "lamp-1".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_render_symbols_for_order() {
        let symbols = OrderSymbols::render(&order(42, "Ana"));

        let qr = symbols.qr.expect("qr rendered");
        assert_eq!(qr.kind(), SymbolKind::Qr);
        assert_eq!(qr.payload(), "Ana, 123 St, ");

        let barcode = symbols.barcode.expect("barcode rendered");
        assert_eq!(barcode.kind(), SymbolKind::Code128);
        assert_eq!(barcode.payload(), "42");
    }

    #[tokio::test]
    async fn test_symbols_reused_until_payload_changes() {
        let config = crate::config::ApiConfig::new("http://127.0.0.1:9").expect("valid url");
        let view = OrdersView::new(StoreApiClient::new(&config).expect("client builds"));

        let first = view.symbols_for(&order(1, "Ana")).await;
        let again = view.symbols_for(&order(1, "Ana")).await;
        assert!(Arc::ptr_eq(&first, &again));

        let renamed = view.symbols_for(&order(1, "Bea")).await;
        assert!(!Arc::ptr_eq(&first, &renamed));
        assert_eq!(
            renamed.qr.as_ref().map(Symbol::payload),
            Some("Bea, 123 St, ")
        );
    }
}
