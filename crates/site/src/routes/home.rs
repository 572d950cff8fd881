//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use pjy_core::Locale;

use crate::filters;
use crate::state::AppState;

use super::{LangQuery, ProductCard};

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub featured_heading: String,
    pub featured: Vec<ProductCard>,
    pub browse_label: String,
    pub contact_label: String,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    let locale = query.locale();
    let products = state.repository().get_all().await;

    let featured = products
        .iter()
        .take(FEATURED_COUNT)
        .map(|product| ProductCard::from_product(product, locale))
        .collect();

    let (title, heading, intro, featured_heading, browse_label, contact_label) = match locale {
        Locale::En => (
            "Home",
            "Professional Touchscreen Solutions",
            "PJY designs and manufactures capacitive and resistive touchscreens, \
             touch all-in-one machines, and industrial display solutions.",
            "Featured Products",
            "Browse All Products",
            "Contact Us",
        ),
        Locale::Zh => (
            "首页",
            "专业触摸屏解决方案",
            "PJY设计和制造电容式和电阻式触摸屏、触摸一体机和工业显示解决方案。",
            "精选产品",
            "浏览所有产品",
            "联系我们",
        ),
    };

    HomeTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        intro: intro.to_string(),
        featured_heading: featured_heading.to_string(),
        featured,
        browse_label: browse_label.to_string(),
        contact_label: contact_label.to_string(),
    }
}
