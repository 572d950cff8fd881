//! HTTP route handlers for the catalog site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /about                  - About page
//! GET  /certificates           - Certificates page
//! GET  /contact                - Contact page
//! POST /contact                - Contact form submission (JSON status)
//!
//! # Products
//! GET  /products               - Product listing (page, category, lang)
//! GET  /products/{slug}        - Product detail
//! GET  /search                 - Fuzzy search results (q, lang)
//!
//! # JSON API
//! GET  /api/products           - Paginated catalog (page, limit, category)
//! GET  /api/products/{id}      - Single product by slug or entry id
//!
//! # Admin (token-gated content QA)
//! GET  /admin/preview          - Bilingual completeness preview
//! POST /admin/refresh          - Drop and rebuild the catalog cache
//! ```
//!
//! Every page exists in both locales; the `lang` query parameter selects
//! the language and defaults to English.

pub mod admin;
pub mod api;
pub mod contact;
pub mod home;
pub mod pages;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use pjy_core::{Locale, Product};

use crate::state::AppState;

/// Query parameter selecting the page language.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

impl LangQuery {
    /// Resolve to a locale, defaulting to English.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.lang.as_deref().map(Locale::parse).unwrap_or_default()
    }
}

/// Product display data shared by the listing, home, and search templates.
#[derive(Clone)]
pub struct ProductCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub href: String,
}

impl ProductCard {
    /// Build a card with text resolved for one locale.
    #[must_use]
    pub fn from_product(product: &Product, locale: Locale) -> Self {
        Self {
            slug: product.slug.clone(),
            title: product.title.resolve(locale).to_string(),
            description: product.description.resolve(locale).to_string(),
            image: product.image.clone(),
            href: format!("/products/{}?lang={}", product.slug, locale),
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::list_products))
        .route("/products/{id}", get(api::get_product))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(admin::preview))
        .route("/refresh", post(admin::refresh))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Marketing pages
        .route("/about", get(pages::about))
        .route("/certificates", get(pages::certificates))
        .route("/contact", get(pages::contact_page).post(contact::submit))
        // Product routes
        .nest("/products", product_routes())
        // Search
        .route("/search", get(search::search_page))
        // JSON API
        .nest("/api", api_routes())
        // Admin content QA
        .nest("/admin", admin_routes())
}
