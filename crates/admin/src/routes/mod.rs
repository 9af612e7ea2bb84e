//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check (store API reachable)
//!
//! # Shell
//! GET  /                         - Navigation shell
//!
//! # Orders
//! GET  /pedidos                  - Load and show orders
//! POST /pedidos                  - Create order
//! POST /pedidos/{id}/eliminar    - Delete order
//!
//! # Products
//! GET  /productos                - Load and show products
//! POST /productos                - Create product
//! POST /productos/{id}/eliminar  - Delete product
//!
//! # Anything else
//! *                              - 404
//! ```

pub mod orders;
pub mod products;

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::{get, post},
};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

/// Path of the orders view.
pub const ORDERS_PATH: &str = "/pedidos";
/// Path of the products view.
pub const PRODUCTS_PATH: &str = "/productos";

/// Build the admin router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        // Shell
        .route("/", get(index))
        // Orders
        .route(ORDERS_PATH, get(orders::index).post(orders::create))
        .route("/pedidos/{id}/eliminar", post(orders::delete))
        // Products
        .route(PRODUCTS_PATH, get(products::index).post(products::create))
        .route("/productos/{id}/eliminar", post(products::delete))
        .fallback(not_found)
}

/// Build the complete application with state attached.
pub fn app(state: AppState) -> Router {
    routes().with_state(state)
}

/// Navigation shell without a selected view.
#[derive(Template)]
#[template(path = "index.html")]
pub struct ShellTemplate {
    pub current_path: String,
}

/// Shell handler.
#[instrument]
pub async fn index() -> Result<Html<String>, AppError> {
    let template = ShellTemplate {
        current_path: "/".to_string(),
    };

    Ok(Html(template.render()?))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the store API answers before returning OK.
/// Returns 503 Service Unavailable if it does not.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.api().list_products().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Store API not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
