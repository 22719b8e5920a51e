//! In-memory view loader for tests and embedding.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{LoadFailure, ViewLoader, ViewModule};
use crate::types::route::RouteDefinition;

/// Resolves modules directly from the route's declared chunk identifier.
///
/// Individual routes can be marked as failing to exercise fallback paths,
/// and a fetch counter exposes how often the underlying "network" was hit.
#[derive(Debug, Default)]
pub struct InMemoryViewLoader {
    failing: RwLock<BTreeSet<String>>,
    fetches: AtomicUsize,
}

impl InMemoryViewLoader {
    /// Create a loader where every route resolves successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent fetch for `route` fail.
    pub fn fail_route(&self, route: &str) {
        self.failing.write().insert(route.to_string());
    }

    /// Clear an injected failure for `route`.
    pub fn heal_route(&self, route: &str) {
        self.failing.write().remove(route);
    }

    /// Total number of underlying fetches performed.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewLoader for InMemoryViewLoader {
    async fn fetch(&self, route: &RouteDefinition) -> Result<ViewModule, LoadFailure> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.read().contains(route.name.as_str()) {
            return Err(LoadFailure {
                route: route.name.clone(),
                reason: "chunk missing".to_string(),
            });
        }
        Ok(ViewModule {
            route: route.name.clone(),
            chunk: route.module.clone(),
        })
    }
}
