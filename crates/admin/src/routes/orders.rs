//! Orders view route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use tienda_costa_core::{OrderForm, format_price};

use super::ORDERS_PATH;
use crate::{
    codes::Symbol,
    error::AppError,
    filters,
    state::AppState,
    views::{OrderEntry, OrdersView},
};

/// Symbol image for templates.
#[derive(Debug, Clone)]
pub struct SymbolView {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl From<&Symbol> for SymbolView {
    fn from(symbol: &Symbol) -> Self {
        Self {
            src: symbol.data_uri().to_string(),
            width: symbol.width(),
            height: symbol.height(),
        }
    }
}

/// Order view for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    /// Percent-encoded ID for use in URLs.
    pub id_path: String,
    pub title: String,
    pub quantity: u32,
    pub unit_price: String,
    pub address: String,
    pub customer_name: String,
    pub email: String,
    pub product: String,
    pub qr: Option<SymbolView>,
    pub barcode: Option<SymbolView>,
}

impl From<&OrderEntry> for OrderView {
    fn from(entry: &OrderEntry) -> Self {
        let order = &entry.order;
        let id = order.id.to_string();

        Self {
            id_path: urlencoding::encode(&id).into_owned(),
            id,
            title: order.title.clone(),
            quantity: order.quantity,
            unit_price: format_price(order.unit_price),
            address: order.address.clone(),
            customer_name: order.customer_name.clone(),
            email: order.email.clone(),
            product: order.product.clone(),
            qr: entry.symbols.qr.as_ref().map(SymbolView::from),
            barcode: entry.symbols.barcode.as_ref().map(SymbolView::from),
        }
    }
}

/// Orders page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: String,
    pub form: OrderForm,
    pub orders: Vec<OrderView>,
}

async fn render(view: &OrdersView, form: OrderForm) -> Result<Html<String>, AppError> {
    let orders = view.entries().await.iter().map(OrderView::from).collect();

    let template = OrdersIndexTemplate {
        current_path: ORDERS_PATH.to_string(),
        form,
        orders,
    };

    Ok(Html(template.render()?))
}

/// Orders page handler. Mounting the view clears the form and reloads the
/// list.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = state.orders();
    view.reset_form().await;
    view.load_orders().await;
    render(view, OrderForm::default()).await
}

/// Create order handler.
///
/// Redirects back to the list on success; on failure the page is rendered
/// again with the submitted values still in the form. Only this response
/// echoes them.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<Response, AppError> {
    let view = state.orders();

    if view.create_order(form.clone()).await {
        return Ok(Redirect::to(ORDERS_PATH).into_response());
    }

    Ok(render(view, form).await?.into_response())
}

/// Delete order handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let view = state.orders();
    let id = view.resolve_id(&id).await;
    view.delete_order(&id).await;
    Redirect::to(ORDERS_PATH)
}
