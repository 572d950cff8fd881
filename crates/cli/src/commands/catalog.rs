//! Catalog inspection commands.
//!
//! Both commands build a repository from the same configuration the site
//! uses, so what they report is exactly what the site would serve.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use pjy_core::{Locale, Product};
use pjy_site::catalog::ProductRepository;
use pjy_site::config::{ConfigError, SiteConfig};
use pjy_site::contentful::ContentfulClient;

/// Errors for catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    NotFound(String),
}

/// Build the Contentful-backed repository from the environment.
fn repository() -> Result<ProductRepository, CatalogCommandError> {
    let config = SiteConfig::from_env()?;
    let source = Arc::new(ContentfulClient::new(&config.contentful));
    Ok(ProductRepository::new(
        source,
        Duration::from_secs(config.catalog_ttl_secs),
    ))
}

/// Report bilingual content completeness across the catalog.
pub async fn check() -> Result<(), CatalogCommandError> {
    let repo = repository()?;
    let products = repo.get_all().await;

    let mut incomplete = 0usize;

    #[allow(clippy::print_stdout)]
    {
        println!("Catalog: {} products", products.len());
        println!();

        for product in products.iter() {
            let missing = missing_fields(product);
            if missing.is_empty() {
                continue;
            }
            incomplete += 1;
            println!("{} ({})", product.slug, product.id);
            for field in missing {
                println!("  - {field}");
            }
        }

        println!();
        if incomplete == 0 {
            println!("All products have complete bilingual content.");
        } else {
            println!(
                "{incomplete} of {} products have incomplete bilingual content.",
                products.len()
            );
        }
    }

    Ok(())
}

/// Dump normalized products as JSON.
pub async fn dump(slug: Option<&str>) -> Result<(), CatalogCommandError> {
    let repo = repository()?;

    let json = match slug {
        Some(slug) => {
            let product = repo
                .get_by_slug(slug)
                .await
                .ok_or_else(|| CatalogCommandError::NotFound(slug.to_string()))?;
            serde_json::to_string_pretty(&product)?
        }
        None => serde_json::to_string_pretty(&*repo.get_all().await)?,
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }

    Ok(())
}

/// The per-product completeness checklist editors work through.
fn missing_fields(product: &Product) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if !product.title.has(Locale::En) {
        missing.push("English title");
    }
    if !product.title.has(Locale::Zh) {
        missing.push("Chinese title");
    }
    if !product.description.has(Locale::En) {
        missing.push("English description");
    }
    if !product.description.has(Locale::Zh) {
        missing.push("Chinese description");
    }
    if product.features.en.is_empty() {
        missing.push("English features");
    }
    if product.features.zh.is_empty() {
        missing.push("Chinese features");
    }

    missing
}
