//! Navigation guards.
//!
//! Guards run strictly in the order the engine composes them; the first
//! non-`Allow` decision short-circuits the pipeline. Guards may suspend:
//! the engine discards late results from superseded navigations.

pub mod auth;

use async_trait::async_trait;

use crate::types::{GuardDecision, Location};

/// One stage of the guard pipeline.
#[async_trait]
pub trait NavigationGuard: Send + Sync {
    /// Stable name used in log lines.
    fn name(&self) -> &'static str;

    /// Decide whether the navigation to `to` (carrying its matched route)
    /// may proceed from `from`.
    async fn check(&self, to: &Location, from: &Location) -> GuardDecision;
}

pub use auth::AuthGate;
