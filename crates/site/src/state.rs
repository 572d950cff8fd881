//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;

use crate::catalog::{ProductRepository, ProductSource};
use crate::config::SiteConfig;
use crate::contentful::ContentfulClient;
use crate::services::EmailClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// product repository, configuration, and external service clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    repository: ProductRepository,
    email: Option<EmailClient>,
}

impl AppState {
    /// Create the application state with the Contentful-backed repository.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let source = Arc::new(ContentfulClient::new(&config.contentful));
        Self::with_source(config, source)
    }

    /// Create the application state with an explicit content source.
    ///
    /// Tests inject fixture sources here instead of the live CMS.
    #[must_use]
    pub fn with_source(config: SiteConfig, source: Arc<dyn ProductSource>) -> Self {
        let repository =
            ProductRepository::new(source, Duration::from_secs(config.catalog_ttl_secs));

        let email = config.email.as_ref().and_then(|email_config| {
            match EmailClient::new(email_config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create email client");
                    None
                }
            }
        });

        Self {
            inner: Arc::new(AppStateInner {
                config,
                repository,
                email,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the product repository.
    #[must_use]
    pub fn repository(&self) -> &ProductRepository {
        &self.inner.repository
    }

    /// Get the email client, when the service is configured.
    #[must_use]
    pub fn email(&self) -> Option<&EmailClient> {
        self.inner.email.as_ref()
    }

    /// Constant-time-ish check of the admin preview token.
    ///
    /// Token lengths are not secret; content comparison short-circuits only
    /// after the length check.
    #[must_use]
    pub fn admin_token_matches(&self, presented: &str) -> bool {
        let expected = self.inner.config.admin_preview_token.expose_secret();
        if presented.len() != expected.len() {
            return false;
        }
        presented
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Warm the catalog cache in the background so the first visitor does
    /// not pay the CMS round-trip.
    pub fn start_catalog_warmup(&self) {
        let repository = self.inner.repository.clone();
        tokio::spawn(async move {
            let count = repository.get_all().await.len();
            tracing::info!(count, "Catalog warmed");
        });
    }
}
