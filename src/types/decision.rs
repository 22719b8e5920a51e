//! Guard decisions.

use super::location::Location;

/// Verdict produced by a single navigation guard.
///
/// The engine short-circuits on the first non-`Allow` decision in the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The navigation may proceed to the next guard, then to loading.
    Allow,
    /// The navigation must be retargeted at the given location.
    Redirect(Location),
    /// The navigation must stop; the previous location stays current.
    Cancel,
}

impl GuardDecision {
    /// Whether this decision lets the pipeline continue.
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}
