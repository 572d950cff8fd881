//! JSON API route handlers.
//!
//! Responses use the `{success, data}` / `{success, error}` envelope the
//! original front end consumed; pagination and category parameters map
//! directly onto the query layer.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pjy_core::Product;

use crate::query::paginate;
use crate::state::AppState;

/// Default page size for the catalog endpoint.
const DEFAULT_LIMIT: usize = 6;

/// Catalog listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Single category label.
    pub category: Option<String>,
    /// Comma-separated category labels; a product matches any of them.
    pub categories: Option<String>,
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
}

/// Paginated catalog payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    pub items: Vec<Product>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

fn ok<T: Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess {
        success: true,
        data,
    })
}

fn failure(status: StatusCode, error: &str) -> (StatusCode, Json<ApiFailure>) {
    (
        status,
        Json(ApiFailure {
            success: false,
            error: error.to_string(),
        }),
    )
}

/// List products with category filtering and pagination.
///
/// GET /api/products?page&limit&category&categories
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> impl IntoResponse {
    let page_number = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let requested: Vec<String> = query
        .categories
        .as_deref()
        .map(|csv| {
            csv.split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .or_else(|| query.category.clone().map(|label| vec![label]))
        .unwrap_or_default();

    let all_products = state.repository().get_all().await;

    let filtered: Vec<Product> = if requested.is_empty()
        || requested.iter().any(|label| label.eq_ignore_ascii_case("all"))
    {
        all_products.as_ref().clone()
    } else {
        all_products
            .iter()
            .filter(|product| requested.iter().any(|label| product.in_category(label)))
            .cloned()
            .collect()
    };

    let page = paginate(&filtered, page_number, limit);

    ok(ProductsPage {
        items: page.items.into_iter().cloned().collect(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        has_next_page: page.has_next_page,
        has_prev_page: page.has_prev_page,
    })
}

/// Get a single product by slug, falling back to lookup by entry id.
///
/// GET /api/products/{id}
#[instrument(skip(state), fields(id = %id))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // Slug first - that's the external key; raw entry ids still work for
    // the admin tooling.
    let product = match state.repository().get_by_slug(&id).await {
        Some(product) => Some(product),
        None => state.repository().get_by_id(&id).await,
    };

    match product {
        Some(product) => ok(product).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Product not found").into_response(),
    }
}
