//! Post-commit hooks: title sync, scroll restore, audit log.
//!
//! Hooks observe a committed navigation and never veto it. They run
//! synchronously relative to the commit, in this order: title, scroll,
//! audit. Cancelled and superseded navigations fire no hooks.

pub mod audit;
pub mod scroll;
pub mod title;

pub use audit::{AuditEntry, AuditLogger, MemoryAuditLogger, TracingAuditLogger};
pub use scroll::restore_position;
pub use title::{DocumentTitle, TitleSink, TitleSynchronizer};
