//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tunable bounds for the navigation engine.
///
/// Defaults fit the storefront shell: one automatic redirect hop, a
/// 64-entry history, and `NotFound` as the load-failure fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPolicy {
    /// Automatic redirect hops allowed per request. A guard redirecting to
    /// a route that is itself denied past this bound is a configuration
    /// error, not retried.
    pub max_redirect_hops: u32,
    /// Maximum retained history entries; the oldest are dropped first.
    pub history_capacity: usize,
    /// Route name committed when a matched route's module fails to load.
    pub fallback_route: String,
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            max_redirect_hops: 1,
            history_capacity: 64,
            fallback_route: "NotFound".to_string(),
        }
    }
}
