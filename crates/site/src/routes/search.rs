//! Search route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use pjy_core::Locale;

use crate::filters;
use crate::query;
use crate::state::AppState;

use super::ProductCard;

/// Search page query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub lang: Option<String>,
}

/// Search results page template.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub query: String,
    pub placeholder: String,
    pub submit_label: String,
    pub results: Vec<ProductCard>,
    pub result_line: String,
    pub empty_message: String,
}

/// Full search page.
///
/// An empty query renders the search box with no results - deliberately not
/// a second product listing.
#[instrument(skip(state))]
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let locale = params
        .lang
        .as_deref()
        .map(Locale::parse)
        .unwrap_or_default();
    let query_str = params.q.trim();

    let products = state.repository().get_all().await;
    let results: Vec<ProductCard> = query::search(&products, query_str, locale)
        .into_iter()
        .map(|product| ProductCard::from_product(product, locale))
        .collect();

    let (title, heading, placeholder, submit_label, empty_message) = match locale {
        Locale::En => (
            "Search",
            "Search Products",
            "Search by product name or feature...",
            "Search",
            "No products matched your search.",
        ),
        Locale::Zh => (
            "搜索",
            "搜索产品",
            "按产品名称或特性搜索...",
            "搜索",
            "没有与您的搜索匹配的产品。",
        ),
    };

    let result_line = if query_str.is_empty() {
        String::new()
    } else {
        match locale {
            Locale::En => format!("{} result(s) for \"{query_str}\"", results.len()),
            Locale::Zh => format!("“{query_str}”共有 {} 个结果", results.len()),
        }
    };

    SearchTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        query: query_str.to_string(),
        placeholder: placeholder.to_string(),
        submit_label: submit_label.to_string(),
        results,
        result_line,
        empty_message: empty_message.to_string(),
    }
}
