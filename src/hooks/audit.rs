//! Navigation audit log.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::types::Location;

/// `tracing` target under which audit lines are emitted, for filtering.
pub const AUDIT_TARGET: &str = "nav_kernel::audit";

/// One recorded path transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the transition committed.
    pub at: DateTime<Utc>,
    /// Path navigated away from.
    pub from: String,
    /// Path navigated to.
    pub to: String,
}

/// Observer of committed navigations.
///
/// Recording is infallible by construction: implementations must swallow
/// their own failures rather than block settlement.
pub trait AuditLogger: Send + Sync {
    /// Record a committed transition.
    fn record(&self, from: &Location, to: &Location);
}

/// Emits one `tracing` info line per committed navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn record(&self, from: &Location, to: &Location) {
        tracing::info!(
            target: AUDIT_TARGET,
            "navigated from {} to {}",
            from.path,
            to.path
        );
    }
}

/// Retains audit entries in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryAuditLogger {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryAuditLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().clone()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl AuditLogger for MemoryAuditLogger {
    fn record(&self, from: &Location, to: &Location) {
        self.entries.write().push(AuditEntry {
            at: Utc::now(),
            from: from.path.clone(),
            to: to.path.clone(),
        });
    }
}
