//! Product listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use pjy_core::{CATEGORY_EQUIVALENTS, GalleryImage, Locale, Product};

use crate::filters;
use crate::query::{filter_by_category, paginate};
use crate::state::AppState;

use super::ProductCard;

/// Products per listing page, matching the original site's grid.
const PAGE_SIZE: usize = 6;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub page: Option<usize>,
    pub category: Option<String>,
    pub lang: Option<String>,
}

/// A category filter link.
#[derive(Clone)]
pub struct CategoryLink {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub lang: &'static str,
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub categories: Vec<CategoryLink>,
    pub products: Vec<ProductCard>,
    pub count_line: String,
    pub empty_message: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub prev_href: String,
    pub next_href: String,
}

/// A specification row for the detail table.
#[derive(Clone)]
pub struct SpecRow {
    pub key: String,
    pub value: String,
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetail {
    pub title: String,
    pub description: String,
    pub image: String,
    pub gallery: Vec<GalleryImage>,
    pub features: Vec<String>,
    pub specifications: Vec<SpecRow>,
    pub categories: Vec<String>,
    pub warranty: Option<String>,
    pub safety_warning: Option<String>,
    pub notes: Option<String>,
}

impl ProductDetail {
    fn from_product(product: &Product, locale: Locale) -> Self {
        // Only filled specification rows reach the table; the template key
        // surface guarantee is for API consumers, not visitors.
        let specifications = product
            .specifications
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| SpecRow {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Self {
            title: product.title.resolve(locale).to_string(),
            description: product.description.resolve(locale).to_string(),
            image: product.image.clone(),
            gallery: product.gallery.clone(),
            features: product.features.resolve(locale).to_vec(),
            specifications,
            categories: product.categories.clone(),
            warranty: product
                .warranty
                .as_ref()
                .map(|text| text.resolve(locale).to_string()),
            safety_warning: product
                .safety_warning
                .as_ref()
                .map(|text| text.resolve(locale).to_string()),
            notes: product
                .notes
                .as_ref()
                .map(|text| text.resolve(locale).to_string()),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub lang: &'static str,
    pub title: String,
    pub product: ProductDetail,
    pub features_heading: String,
    pub specifications_heading: String,
    pub warranty_heading: String,
    pub safety_heading: String,
    pub notes_heading: String,
    pub back_label: String,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub lang: &'static str,
    pub title: String,
    pub message: String,
    pub back_label: String,
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let locale = query
        .lang
        .as_deref()
        .map(Locale::parse)
        .unwrap_or_default();
    let selected = query.category.as_deref().unwrap_or("all");
    let page_number = query.page.unwrap_or(1);

    let all_products = state.repository().get_all().await;
    let filtered = filter_by_category(&all_products, selected);

    // paginate takes a contiguous product slice, not the filter's references
    let filtered_owned: Vec<Product> = filtered.into_iter().cloned().collect();
    let page = paginate(&filtered_owned, page_number, PAGE_SIZE);

    let products: Vec<ProductCard> = page
        .items
        .iter()
        .map(|product| ProductCard::from_product(product, locale))
        .collect();

    let listing_href = |page: usize| -> String {
        let mut href = format!("/products?page={page}&lang={locale}");
        if selected != "all" {
            href.push_str("&category=");
            href.push_str(&urlencoding::encode(selected));
        }
        href
    };

    let mut categories = vec![CategoryLink {
        label: match locale {
            Locale::En => "All".to_string(),
            Locale::Zh => "全部".to_string(),
        },
        href: format!("/products?lang={locale}"),
        selected: selected == "all",
    }];
    categories.extend(CATEGORY_EQUIVALENTS.iter().map(|(en, zh)| {
        let label = match locale {
            Locale::En => (*en).to_string(),
            Locale::Zh => (*zh).to_string(),
        };
        CategoryLink {
            href: format!(
                "/products?lang={locale}&category={}",
                urlencoding::encode(&label)
            ),
            selected: pjy_core::labels_equivalent(&label, selected),
            label,
        }
    }));

    let (title, heading, intro, empty_message) = match locale {
        Locale::En => (
            "Products",
            "Our Products",
            "Explore our range of innovative touchscreen solutions designed for various applications.",
            "No products found in this category.",
        ),
        Locale::Zh => (
            "产品",
            "我们的产品",
            "探索我们为各种应用设计的创新触摸屏解决方案系列。",
            "在此类别中找不到产品。",
        ),
    };

    let count_line = match locale {
        Locale::En => format!(
            "Showing {} of {} products",
            page.items.len(),
            page.total_items
        ),
        Locale::Zh => format!(
            "显示 {} 个产品中的 {} 个",
            page.total_items,
            page.items.len()
        ),
    };

    ProductsIndexTemplate {
        lang: locale.as_str(),
        title: title.to_string(),
        heading: heading.to_string(),
        intro: intro.to_string(),
        categories,
        products,
        count_line,
        empty_message: empty_message.to_string(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        has_next_page: page.has_next_page,
        has_prev_page: page.has_prev_page,
        prev_href: listing_href(page.current_page.saturating_sub(1).max(1)),
        next_href: listing_href(page.current_page + 1),
    }
}

/// Display the product detail page.
#[instrument(skip(state), fields(slug = %slug))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<super::LangQuery>,
) -> impl IntoResponse {
    let locale = query.locale();

    let Some(product) = state.repository().get_by_slug(&slug).await else {
        return not_found(locale).into_response();
    };

    let headings = match locale {
        Locale::En => (
            "Key Features",
            "Specifications",
            "Warranty",
            "Safety Warning",
            "Notes",
            "Back to Products",
        ),
        Locale::Zh => ("主要特点", "规格参数", "保修", "安全警告", "注意事项", "返回产品列表"),
    };

    ProductShowTemplate {
        lang: locale.as_str(),
        title: product.title.resolve(locale).to_string(),
        product: ProductDetail::from_product(&product, locale),
        features_heading: headings.0.to_string(),
        specifications_heading: headings.1.to_string(),
        warranty_heading: headings.2.to_string(),
        safety_heading: headings.3.to_string(),
        notes_heading: headings.4.to_string(),
        back_label: headings.5.to_string(),
    }
    .into_response()
}

/// Render the bilingual not-found page with a 404 status.
fn not_found(locale: Locale) -> impl IntoResponse {
    let (title, message, back_label) = match locale {
        Locale::En => (
            "Product Not Found",
            "The product you are looking for does not exist or has been removed.",
            "Back to Products",
        ),
        Locale::Zh => ("未找到产品", "您查找的产品不存在或已被删除。", "返回产品列表"),
    };

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            lang: locale.as_str(),
            title: title.to_string(),
            message: message.to_string(),
            back_label: back_label.to_string(),
        },
    )
}
