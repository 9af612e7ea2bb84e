//! Products view route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use tienda_costa_core::{Product, ProductForm, format_price};

use super::PRODUCTS_PATH;
use crate::{error::AppError, filters, state::AppState, views::ProductsView};

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    /// Percent-encoded ID for use in URLs.
    pub id_path: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let id = product.id.to_string();

        Self {
            id_path: urlencoding::encode(&id).into_owned(),
            id,
            name: product.name.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Products page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub current_path: String,
    pub form: ProductForm,
    pub products: Vec<ProductView>,
}

async fn render(view: &ProductsView, form: ProductForm) -> Result<Html<String>, AppError> {
    let products = view.products().await.iter().map(ProductView::from).collect();

    let template = ProductsIndexTemplate {
        current_path: PRODUCTS_PATH.to_string(),
        form,
        products,
    };

    Ok(Html(template.render()?))
}

/// Products page handler. Mounting the view clears the form and reloads the
/// list.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = state.products();
    view.reset_form().await;
    view.load_products().await;
    render(view, ProductForm::default()).await
}

/// Create product handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let view = state.products();

    if view.create_product(form.clone()).await {
        return Ok(Redirect::to(PRODUCTS_PATH).into_response());
    }

    Ok(render(view, form).await?.into_response())
}

/// Delete product handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let view = state.products();
    let id = view.resolve_id(&id).await;
    view.delete_product(&id).await;
    Redirect::to(PRODUCTS_PATH)
}
