//! Admin content-QA route handlers.
//!
//! A token-gated preview of the normalized catalog for content editors:
//! which products are missing Chinese content, which have Chinese that is
//! just a copy of the English, which have no matching photography. The
//! admin surface is read-only apart from the cache refresh; there is no
//! write-back to the CMS.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pjy_core::{Locale, Product};

use crate::catalog::images::PLACEHOLDER_IMAGE;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Admin query parameters.
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    pub token: Option<String>,
}

/// One product row in the preview table.
pub struct ProductRow {
    pub id_short: String,
    pub slug: String,
    pub title_en_ok: bool,
    pub title_zh_ok: bool,
    pub description_zh_ok: bool,
    pub features_zh_ok: bool,
    pub image_ok: bool,
    pub updated_at: String,
}

/// A content issue surfaced to editors.
pub struct IssueRow {
    pub slug: String,
    pub field: &'static str,
    pub message: &'static str,
}

/// Admin preview page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/preview.html")]
pub struct AdminPreviewTemplate {
    pub lang: &'static str,
    pub title: String,
    pub catalog_size: usize,
    pub issues: Vec<IssueRow>,
    pub products: Vec<ProductRow>,
}

/// Refresh response payload.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub count: usize,
}

/// Check for the content issues the editors care about.
fn collect_issues(products: &[Product]) -> Vec<IssueRow> {
    let mut issues = Vec::new();

    for product in products {
        if !product.title.has(Locale::Zh) {
            issues.push(IssueRow {
                slug: product.slug.clone(),
                field: "title.zh",
                message: "Missing Chinese title",
            });
        } else if product.title.zh == product.title.en {
            issues.push(IssueRow {
                slug: product.slug.clone(),
                field: "title.zh",
                message: "Chinese title is a copy of the English title",
            });
        }

        if !product.description.has(Locale::Zh) {
            issues.push(IssueRow {
                slug: product.slug.clone(),
                field: "description.zh",
                message: "Missing Chinese description",
            });
        }

        if product.features.zh.is_empty() && !product.features.en.is_empty() {
            issues.push(IssueRow {
                slug: product.slug.clone(),
                field: "features.zh",
                message: "Missing Chinese features",
            });
        }

        if product.image == PLACEHOLDER_IMAGE {
            issues.push(IssueRow {
                slug: product.slug.clone(),
                field: "image",
                message: "No photography mapped to this slug",
            });
        }
    }

    issues
}

/// Verify the presented token against the configured one.
fn authorize(state: &AppState, query: &AdminQuery) -> Result<(), AppError> {
    let presented = query.token.as_deref().unwrap_or_default();
    if state.admin_token_matches(presented) {
        Ok(())
    } else {
        Err(AppError::Unauthorized("invalid admin token".to_string()))
    }
}

/// Display the content preview table.
///
/// GET /admin/preview?token=...
#[instrument(skip(state, query))]
pub async fn preview(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&state, &query)?;

    let products = state.repository().get_all().await;
    let issues = collect_issues(&products);

    let rows = products
        .iter()
        .map(|product| ProductRow {
            id_short: product.id.chars().take(8).collect(),
            slug: product.slug.clone(),
            title_en_ok: product.title.has(Locale::En),
            title_zh_ok: product.title.has(Locale::Zh),
            description_zh_ok: product.description.has(Locale::Zh),
            features_zh_ok: !product.features.zh.is_empty(),
            image_ok: product.image != PLACEHOLDER_IMAGE,
            updated_at: product
                .updated_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        })
        .collect();

    Ok(AdminPreviewTemplate {
        lang: "en",
        title: "Content Preview".to_string(),
        catalog_size: products.len(),
        issues,
        products: rows,
    })
}

/// Drop the catalog cache and rebuild it.
///
/// POST /admin/refresh?token=...
#[instrument(skip(state, query))]
pub async fn refresh(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&state, &query)?;

    let count = state.repository().refresh().await;
    tracing::info!(count, "Catalog refreshed by admin");

    Ok(Json(RefreshResponse {
        success: true,
        count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pjy_core::{BilingualList, BilingualText};

    fn product(slug: &str, title: BilingualText) -> Product {
        Product {
            id: slug.to_string(),
            slug: slug.to_string(),
            title,
            image: "/images/products/ok.jpg".to_string(),
            description: BilingualText::new("desc", "描述"),
            features: BilingualList::new(vec!["f".to_string()], vec!["特".to_string()]),
            ..Product::default()
        }
    }

    #[test]
    fn flags_missing_chinese_title() {
        let products = vec![product("camera-x", BilingualText::english("Camera X"))];
        let issues = collect_issues(&products);
        assert!(issues.iter().any(|i| i.field == "title.zh"
            && i.message == "Missing Chinese title"));
    }

    #[test]
    fn flags_copied_chinese_title() {
        let products = vec![product(
            "camera-x",
            BilingualText::new("Camera X", "Camera X"),
        )];
        let issues = collect_issues(&products);
        assert!(issues.iter().any(|i| i.message.contains("copy")));
    }

    #[test]
    fn complete_product_raises_no_issues() {
        let products = vec![product(
            "camera-x",
            BilingualText::new("Camera X", "摄像头X"),
        )];
        assert!(collect_issues(&products).is_empty());
    }

    #[test]
    fn flags_placeholder_image() {
        let mut item = product("camera-x", BilingualText::new("Camera X", "摄像头X"));
        item.image = PLACEHOLDER_IMAGE.to_string();
        let issues = collect_issues(&[item]);
        assert!(issues.iter().any(|i| i.field == "image"));
    }
}
