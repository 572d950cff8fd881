//! Product repository: fetch, normalize, memoize.
//!
//! An explicit, injectable object constructed once per process - no hidden
//! module-level state. The normalized catalog is memoized in a `moka` cache
//! for the configured revalidation window; a fresh window rebuilds from
//! scratch. Concurrent first requests may each trigger a fetch; the last
//! writer wins, which is harmless because normalization is idempotent.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, instrument};

use pjy_core::Product;

use crate::contentful::{ContentfulClient, ContentfulError, RawEntry};

use super::normalizer::normalize;

/// Cache key for the full normalized catalog.
const CATALOG_KEY: &str = "products:all";

/// Where raw product entries come from.
///
/// The site wires in [`ContentfulClient`]; tests wire in fixture sources.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch every product entry.
    async fn fetch_all(&self) -> Result<Vec<RawEntry>, ContentfulError>;

    /// Fetch a single entry by its slug field.
    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<RawEntry>, ContentfulError>;
}

#[async_trait]
impl ProductSource for ContentfulClient {
    async fn fetch_all(&self) -> Result<Vec<RawEntry>, ContentfulError> {
        self.entries().await
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<RawEntry>, ContentfulError> {
        self.entry_by_slug(slug).await
    }
}

/// Read-side repository over the normalized catalog.
#[derive(Clone)]
pub struct ProductRepository {
    inner: Arc<RepositoryInner>,
}

struct RepositoryInner {
    source: Arc<dyn ProductSource>,
    cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl ProductRepository {
    /// Create a new repository over a content source.
    ///
    /// `ttl` is the revalidation window; the catalog changes infrequently,
    /// so staleness up to the window is the accepted trade-off.
    #[must_use]
    pub fn new(source: Arc<dyn ProductSource>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(4).time_to_live(ttl).build();

        Self {
            inner: Arc::new(RepositoryInner { source, cache }),
        }
    }

    /// Get the full normalized catalog.
    ///
    /// Served from the memoized list when present. A fetch failure is
    /// logged and yields an empty list without populating the cache, so the
    /// next call retries.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Arc<Vec<Product>> {
        if let Some(products) = self.inner.cache.get(CATALOG_KEY).await {
            debug!("Cache hit for catalog");
            return products;
        }

        match self.inner.source.fetch_all().await {
            Ok(entries) => {
                let products: Arc<Vec<Product>> =
                    Arc::new(entries.iter().map(normalize).collect());
                self.inner
                    .cache
                    .insert(CATALOG_KEY, Arc::clone(&products))
                    .await;
                debug!(count = products.len(), "Catalog fetched and cached");
                products
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch catalog; serving empty list");
                Arc::new(Vec::new())
            }
        }
    }

    /// Look up a single product by slug.
    ///
    /// Checks the memoized list first; when the list is absent or does not
    /// contain the slug, falls through to a direct point lookup against the
    /// CMS. The point-lookup result is not merged back into the list cache.
    /// Transport failure and absence both come back as `None`.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_by_slug(&self, slug: &str) -> Option<Product> {
        if let Some(products) = self.inner.cache.get(CATALOG_KEY).await {
            if let Some(product) = products.iter().find(|p| p.slug == slug) {
                debug!("Cache hit for product");
                return Some(product.clone());
            }
        }

        match self.inner.source.fetch_by_slug(slug).await {
            Ok(entry) => entry.as_ref().map(normalize),
            Err(e) => {
                tracing::error!(error = %e, "Point lookup failed");
                None
            }
        }
    }

    /// Look up a single product by its opaque entry id.
    ///
    /// Only searches the (possibly freshly-built) catalog list; ids are not
    /// a CMS filter the delivery client exposes here.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Option<Product> {
        self.get_all().await.iter().find(|p| p.id == id).cloned()
    }

    /// Drop the memoized catalog and rebuild it.
    ///
    /// Returns the size of the rebuilt catalog.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> usize {
        self.inner.cache.invalidate(&CATALOG_KEY).await;
        self.get_all().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::contentful::RawSys;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source with call counters and a failure toggle.
    struct FixtureSource {
        entries: Vec<RawEntry>,
        fail: std::sync::atomic::AtomicBool,
        fetch_all_calls: AtomicUsize,
        fetch_by_slug_calls: AtomicUsize,
    }

    impl FixtureSource {
        fn new(entries: Vec<RawEntry>) -> Self {
            Self {
                entries,
                fail: std::sync::atomic::AtomicBool::new(false),
                fetch_all_calls: AtomicUsize::new(0),
                fetch_by_slug_calls: AtomicUsize::new(0),
            }
        }

        fn transport_error() -> ContentfulError {
            ContentfulError::Api {
                status: 502,
                message: "upstream unavailable".to_string(),
            }
        }
    }

    #[async_trait]
    impl ProductSource for FixtureSource {
        async fn fetch_all(&self) -> Result<Vec<RawEntry>, ContentfulError> {
            self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::transport_error());
            }
            Ok(self.entries.clone())
        }

        async fn fetch_by_slug(&self, slug: &str) -> Result<Option<RawEntry>, ContentfulError> {
            self.fetch_by_slug_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::transport_error());
            }
            Ok(self.entries.iter().find(|e| {
                e.fields.get("slug").and_then(|v| v.as_str()) == Some(slug)
            }).cloned())
        }
    }

    fn fixture_entry(id: &str, slug: &str, title: &str) -> RawEntry {
        RawEntry {
            sys: RawSys {
                id: id.to_string(),
                updated_at: None,
            },
            fields: json!({"slug": slug, "title": title})
                .as_object()
                .cloned()
                .unwrap(),
        }
    }

    fn repository(source: Arc<FixtureSource>) -> ProductRepository {
        ProductRepository::new(source, Duration::from_secs(300))
    }

    #[tokio::test]
    async fn get_all_memoizes_the_catalog() {
        let source = Arc::new(FixtureSource::new(vec![
            fixture_entry("1", "camera-x", "Camera X"),
            fixture_entry("2", "display-y", "Display Y"),
        ]));
        let repo = repository(Arc::clone(&source));

        let first = repo.get_all().await;
        let second = repo.get_all().await;

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(source.fetch_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_list_and_is_not_cached() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "1", "camera-x", "Camera X",
        )]));
        source.fail.store(true, Ordering::SeqCst);
        let repo = repository(Arc::clone(&source));

        assert!(repo.get_all().await.is_empty());

        // Recovery: the empty result was not cached, so the next call
        // refetches and succeeds.
        source.fail.store(false, Ordering::SeqCst);
        assert_eq!(repo.get_all().await.len(), 1);
        assert_eq!(source.fetch_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn get_by_slug_serves_from_cached_list() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "1", "camera-x", "Camera X",
        )]));
        let repo = repository(Arc::clone(&source));

        repo.get_all().await;
        let product = repo.get_by_slug("camera-x").await.unwrap();

        assert_eq!(product.title.en, "Camera X");
        assert_eq!(source.fetch_by_slug_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn get_by_slug_point_lookup_matches_cached_value() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "1", "camera-x", "Camera X",
        )]));

        // Cold repository: point lookup path.
        let cold = repository(Arc::clone(&source));
        let via_lookup = cold.get_by_slug("camera-x").await.unwrap();
        assert_eq!(source.fetch_by_slug_calls.load(Ordering::SeqCst), 1);

        // Warm repository: cache path. Same CMS state must mean same value.
        let warm = repository(Arc::clone(&source));
        warm.get_all().await;
        let via_cache = warm.get_by_slug("camera-x").await.unwrap();

        assert_eq!(via_lookup, via_cache);
    }

    #[tokio::test]
    async fn get_by_slug_missing_and_failing_both_yield_none() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "1", "camera-x", "Camera X",
        )]));
        let repo = repository(Arc::clone(&source));

        assert!(repo.get_by_slug("no-such-product").await.is_none());

        source.fail.store(true, Ordering::SeqCst);
        assert!(repo.get_by_slug("camera-x").await.is_none());
    }

    #[tokio::test]
    async fn get_by_id_finds_products_from_the_list() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "abc123", "camera-x", "Camera X",
        )]));
        let repo = repository(Arc::clone(&source));

        let product = repo.get_by_id("abc123").await.unwrap();
        assert_eq!(product.slug, "camera-x");
        assert!(repo.get_by_id("nope").await.is_none());
    }

    #[tokio::test]
    async fn refresh_invalidates_and_refetches() {
        let source = Arc::new(FixtureSource::new(vec![fixture_entry(
            "1", "camera-x", "Camera X",
        )]));
        let repo = repository(Arc::clone(&source));

        repo.get_all().await;
        let count = repo.refresh().await;

        assert_eq!(count, 1);
        assert_eq!(source.fetch_all_calls.load(Ordering::SeqCst), 2);
    }
}
