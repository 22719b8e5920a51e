//! # nav-kernel
//!
//! Deterministic client-side navigation for a single-page-application shell.
//!
//! The engine answers one question:
//!
//! > Given a requested path, which view becomes current, and what may
//! > observe that transition?
//!
//! ## Core Contract
//!
//! 1. Match the path against an ordered route table (catch-all last)
//! 2. Run the guard pipeline in composed order; first non-`Allow` wins
//! 3. Lazily resolve the matched view module, cached for the process lifetime
//! 4. Commit, then run hooks in order: title sync, scroll restore, audit log
//!
//! ## Architecture
//!
//! ```text
//! path → RouteTable → Guard pipeline → CachingLoader → Commit
//!                          │ Redirect (bounded hops)      │
//!                          │ Cancel → settle     Title → Scroll → Audit
//!                          └── AuthGate ← SessionStore
//! ```
//!
//! ## Ordering Guarantees
//!
//! - Guards run strictly in composed order; the first non-`Allow` decision
//!   short-circuits the pipeline
//! - Post-commit hooks run synchronously relative to the commit
//! - "Last navigation started wins": a request superseded by a newer one
//!   settles with no observable effects

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod guard;
pub mod history;
pub mod hooks;
pub mod loader;
pub mod normalize;
pub mod routes;
pub mod session;
pub mod table;
pub mod types;

// Re-exports
pub use config::NavigationPolicy;
pub use engine::{EngineError, EngineState, NavigationEngine, NavigationOutcome};
pub use guard::auth::REDIRECT_PARAM;
pub use guard::{AuthGate, NavigationGuard};
pub use history::{History, HistoryEntry};
pub use hooks::{
    restore_position, AuditEntry, AuditLogger, DocumentTitle, MemoryAuditLogger, TitleSink,
    TitleSynchronizer, TracingAuditLogger,
};
pub use loader::{CachingLoader, InMemoryViewLoader, LoadFailure, ViewLoader, ViewModule};
pub use routes::storefront_table;
pub use session::{InMemorySessionStore, SessionStore, SESSION_TOKEN_KEY};
pub use table::{RouteTable, TableError};
pub use types::decision::GuardDecision;
pub use types::location::{Location, NavigationKind, ScrollPosition};
pub use types::route::{RouteDefinition, RouteMeta, RoutePattern};
