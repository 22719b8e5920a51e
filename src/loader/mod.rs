//! View module loading and caching.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::route::RouteDefinition;

/// A renderable unit produced by resolving a route's loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModule {
    /// Name of the route the module renders.
    pub route: String,
    /// Identifier of the code chunk that was fetched.
    pub chunk: String,
}

/// A view module's code could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("view module for route '{route}' failed to load: {reason}")]
pub struct LoadFailure {
    /// Name of the offending route.
    pub route: String,
    /// Human-readable cause (network error, missing chunk).
    pub reason: String,
}

/// Fetches the code behind a route on demand.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    /// Fetch the module for `route`.
    ///
    /// The engine's caching layer calls this at most once per route.
    async fn fetch(&self, route: &RouteDefinition) -> Result<ViewModule, LoadFailure>;
}

#[async_trait]
impl<T: ViewLoader + ?Sized> ViewLoader for Arc<T> {
    async fn fetch(&self, route: &RouteDefinition) -> Result<ViewModule, LoadFailure> {
        (**self).fetch(route).await
    }
}

/// Caches resolved modules for the lifetime of the process.
///
/// The first navigation to a route triggers the underlying fetch; later
/// navigations hit the cache. The cache is unbounded: evicting would
/// re-introduce a fetch the contract says happens once.
pub struct CachingLoader<L> {
    inner: L,
    cache: Mutex<LruCache<String, ViewModule>>,
}

impl<L: ViewLoader> CachingLoader<L> {
    /// Wrap a loader with a process-lifetime cache.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::unbounded()),
        }
    }

    /// Resolve `route` to its view module, fetching on first use.
    ///
    /// Failures are not cached; the next navigation retries the fetch.
    pub async fn resolve(&self, route: &RouteDefinition) -> Result<ViewModule, LoadFailure> {
        if let Some(module) = self.cache.lock().get(&route.name).cloned() {
            return Ok(module);
        }
        let module = self.inner.fetch(route).await?;
        self.cache.lock().put(route.name.clone(), module.clone());
        Ok(module)
    }

    /// Number of modules resolved so far.
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }
}

pub use memory::InMemoryViewLoader;
