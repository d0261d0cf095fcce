//! Catalog providers: the asynchronous source of asset sets

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::descriptor::AssetSet;
use super::registry::IconRegistry;

/// Asynchronous source of the assets available for an icon name
///
/// Unknown names yield an empty set, never an error. The returned order is
/// authoritative: resolvers pick their fallback from the first entry.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every asset known for `name`
    async fn fetch_assets(&self, name: &str) -> AssetSet;
}

#[async_trait]
impl<P: CatalogProvider + ?Sized> CatalogProvider for Arc<P> {
    async fn fetch_assets(&self, name: &str) -> AssetSet {
        (**self).fetch_assets(name).await
    }
}

/// Provider serving a fixed registry
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    registry: Arc<IconRegistry>,
    latency: Duration,
}

impl StaticProvider {
    /// Serve the given registry
    pub fn new(registry: IconRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            latency: Duration::ZERO,
        }
    }

    /// Delay every fetch, simulating a remote catalog
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The registry being served
    pub fn registry(&self) -> &IconRegistry {
        &self.registry
    }
}

#[async_trait]
impl CatalogProvider for StaticProvider {
    async fn fetch_assets(&self, name: &str) -> AssetSet {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.registry.get(name)
    }
}

/// Provider memoizing another provider's fetches per icon name
///
/// Only the fetch is cached. Every resolver still holds its own snapshot
/// and performs its own selection.
pub struct CachedProvider<P> {
    inner: P,
    cache: Mutex<HashMap<String, AssetSet>>,
}

impl<P: CatalogProvider> CachedProvider<P> {
    /// Wrap a provider
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Forget the cached set for one name
    pub async fn invalidate(&self, name: &str) {
        self.cache.lock().await.remove(name);
    }

    /// Forget every cached set
    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    /// The wrapped provider
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: CatalogProvider> CatalogProvider for CachedProvider<P> {
    async fn fetch_assets(&self, name: &str) -> AssetSet {
        if let Some(hit) = self.cache.lock().await.get(name) {
            tracing::trace!(name, "catalog cache hit");
            return hit.clone();
        }

        // Not held across the fetch so other names are not blocked
        let set = self.inner.fetch_assets(name).await;
        self.cache
            .lock()
            .await
            .entry(name.to_string())
            .or_insert(set)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetDescriptor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogProvider for CountingProvider {
        async fn fetch_assets(&self, _name: &str) -> AssetSet {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AssetSet::new(vec![AssetDescriptor::new(16, 1, "u16").expect("valid")])
        }
    }

    fn bat_registry() -> IconRegistry {
        let mut registry = IconRegistry::new();
        registry.register("bat", AssetDescriptor::new(16, 1, "u16").expect("valid"));
        registry
    }

    #[tokio::test]
    async fn test_static_provider_unknown_name() {
        let provider = StaticProvider::new(bat_registry());
        assert_eq!(provider.fetch_assets("bat").await.len(), 1);
        assert!(provider.fetch_assets("owl").await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_static_provider_latency() {
        let provider = StaticProvider::new(bat_registry()).with_latency(Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        let set = provider.fetch_assets("bat").await;
        assert_eq!(set.len(), 1);
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_cached_provider_memoizes_fetch() {
        let cached = CachedProvider::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });

        let first = cached.fetch_assets("bat").await;
        let second = cached.fetch_assets("bat").await;
        assert_eq!(first, second);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);

        cached.invalidate("bat").await;
        cached.fetch_assets("bat").await;
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);

        cached.clear().await;
        cached.fetch_assets("bat").await;
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);
    }
}
