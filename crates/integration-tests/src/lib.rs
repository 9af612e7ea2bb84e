//! Integration tests for Tienda Costa.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tienda-costa-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `orders_view` - Order controller against the mock store API
//! - `products_view` - Product controller against the mock store API
//! - `admin_routes` - Full HTTP router driven with `tower::ServiceExt::oneshot`
//!
//! The store API is replaced by [`MockStoreApi`], an in-process axum server on
//! a random port. It keeps orders and products in memory, records every
//! request it receives, and can be switched to answer 500 for reads, writes,
//! or both.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use tienda_costa_admin::config::AdminConfig;
use tienda_costa_admin::state::AppState;

/// A request received by the mock store API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    orders: RwLock<Vec<Value>>,
    products: RwLock<Vec<Value>>,
    requests: RwLock<Vec<RecordedRequest>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockState {
    async fn record(&self, method: &'static str, path: impl Into<String>, body: Option<Value>) {
        self.requests.write().await.push(RecordedRequest {
            method,
            path: path.into(),
            body,
        });
    }

    fn assign_id(&self, mut record: Value) -> Value {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), json!(id));
        }
        record
    }
}

/// In-process mock of the store API.
pub struct MockStoreApi {
    state: Arc<MockState>,
    addr: SocketAddr,
    /// Server handle (kept alive to prevent shutdown)
    _handle: JoinHandle<()>,
}

impl MockStoreApi {
    /// Start a mock store API on a random available port.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start() -> Self {
        let state = Arc::new(MockState {
            next_id: AtomicI64::new(100),
            ..MockState::default()
        });

        let router = Router::new()
            .route("/api/orders", get(list_orders))
            .route("/api/create-order", post(create_order))
            .route("/api/order", delete(delete_order))
            .route("/api/products", get(list_products).post(create_product))
            .route("/api/products/{id}", delete(delete_product))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock store API");
        let addr = listener.local_addr().expect("mock store API address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock store API server");
        });

        Self {
            state,
            addr,
            _handle: handle,
        }
    }

    /// Base URL of the mock.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Admin configuration pointing at this mock.
    ///
    /// # Panics
    ///
    /// Panics if the configuration cannot be built.
    #[must_use]
    pub fn admin_config(&self) -> AdminConfig {
        let url = self.url();
        AdminConfig::from_lookup(|key| (key == "TIENDA_API_URL").then(|| url.clone()))
            .expect("admin config for mock")
    }

    /// Admin application state pointing at this mock.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be built.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(self.admin_config()).expect("app state for mock")
    }

    pub async fn seed_orders(&self, orders: Vec<Value>) {
        *self.state.orders.write().await = orders;
    }

    pub async fn seed_products(&self, products: Vec<Value>) {
        *self.state.products.write().await = products;
    }

    pub async fn orders(&self) -> Vec<Value> {
        self.state.orders.read().await.clone()
    }

    pub async fn products(&self) -> Vec<Value> {
        self.state.products.read().await.clone()
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    pub async fn clear_requests(&self) {
        self.state.requests.write().await.clear();
    }

    /// Make list endpoints answer 500.
    pub fn fail_reads(&self, fail: bool) {
        self.state.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make create and delete endpoints answer 500.
    pub fn fail_writes(&self, fail: bool) {
        self.state.fail_writes.store(fail, Ordering::SeqCst);
    }
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "mock failure").into_response()
}

/// The record's identifier, under either `id` or `_id`.
fn record_id(record: &Value) -> Option<&Value> {
    record.get("id").or_else(|| record.get("_id"))
}

fn same_id(record: &Value, id: &str) -> bool {
    match record_id(record) {
        Some(Value::String(s)) => s == id,
        Some(other) => other.to_string() == id,
        None => false,
    }
}

async fn list_orders(State(state): State<Arc<MockState>>) -> Response {
    state.record("GET", "/api/orders", None).await;
    if state.fail_reads.load(Ordering::SeqCst) {
        return server_error();
    }
    Json(state.orders.read().await.clone()).into_response()
}

async fn create_order(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state
        .record("POST", "/api/create-order", Some(body.clone()))
        .await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return server_error();
    }
    let order = state.assign_id(body);
    state.orders.write().await.push(order.clone());
    Json(json!({"status": "success", "order": order})).into_response()
}

async fn delete_order(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.record("DELETE", "/api/order", Some(body.clone())).await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return server_error();
    }
    let Some(id) = body.get("id").cloned() else {
        return (StatusCode::BAD_REQUEST, "missing id").into_response();
    };

    let mut orders = state.orders.write().await;
    let before = orders.len();
    orders.retain(|order| record_id(order) != Some(&id));
    if orders.len() == before {
        return (StatusCode::NOT_FOUND, "order not found").into_response();
    }
    Json(json!({"status": "deleted"})).into_response()
}

async fn list_products(State(state): State<Arc<MockState>>) -> Response {
    state.record("GET", "/api/products", None).await;
    if state.fail_reads.load(Ordering::SeqCst) {
        return server_error();
    }
    Json(state.products.read().await.clone()).into_response()
}

async fn create_product(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/products", Some(body.clone())).await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return server_error();
    }
    let product = state.assign_id(body);
    state.products.write().await.push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn delete_product(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    state
        .record("DELETE", format!("/api/products/{id}"), None)
        .await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return server_error();
    }

    let mut products = state.products.write().await;
    let before = products.len();
    products.retain(|product| !same_id(product, &id));
    if products.len() == before {
        return (StatusCode::NOT_FOUND, "product not found").into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}
