//! The navigation engine.
//!
//! Orchestrates one navigation at a time through an explicit state machine:
//!
//! ```text
//! Idle → Resolving → GuardRunning → Loading → Committing → Settled → Idle
//!            ↑            │
//!            └─ Redirect ─┘  (bounded hops)
//! ```
//!
//! ## Ordering guarantees
//!
//! - Guards run in composed order; the first non-`Allow` short-circuits.
//! - Post-commit hooks run synchronously after the commit, in order:
//!   title sync, scroll restore, audit log.
//! - "Last navigation started wins": each request takes a generation
//!   ticket; a request that observes a newer ticket after a suspension
//!   point settles as [`NavigationOutcome::Superseded`] with no effects.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::NavigationPolicy;
use crate::guard::NavigationGuard;
use crate::history::History;
use crate::hooks::{restore_position, AuditLogger, TitleSink, TitleSynchronizer};
use crate::loader::{CachingLoader, LoadFailure, ViewLoader, ViewModule};
use crate::table::RouteTable;
use crate::types::{GuardDecision, Location, NavigationKind, ScrollPosition};

/// Lifecycle phase of the engine's in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No request in flight.
    Idle,
    /// Matching the requested path against the route table.
    Resolving,
    /// Running the guard pipeline.
    GuardRunning,
    /// Resolving the matched route's view module.
    Loading,
    /// Swapping the current location.
    Committing,
    /// Request resolved; about to return to `Idle`.
    Settled,
}

/// Configuration errors surfaced by the engine.
///
/// None of these are expected at runtime against a well-formed table: a
/// catch-all entry makes `RouteNotFound` unreachable, and a public login
/// route makes `RedirectLoop` unreachable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No pattern matched and no catch-all is registered.
    #[error("no route matches '{0}' and no catch-all is registered")]
    RouteNotFound(String),
    /// The redirect hop bound was exceeded.
    #[error("redirect loop: '{from}' was redirected to '{to}', which was itself denied")]
    RedirectLoop {
        /// Path whose guards produced the final redirect.
        from: String,
        /// Redirect target that would have started another hop.
        to: String,
    },
    /// The configured fallback route is not in the table.
    #[error("fallback route '{0}' is not registered")]
    MissingFallback(String),
    /// The fallback route's own module failed to load.
    #[error("fallback view failed to load: {0}")]
    FallbackLoad(#[from] LoadFailure),
}

/// Terminal result of one navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// The target became current and hooks ran.
    Committed {
        /// The now-current location.
        location: Location,
        /// The resolved view for it.
        view: ViewModule,
    },
    /// A guard cancelled; the previous location stays current, no hooks ran.
    Cancelled,
    /// A newer request superseded this one; none of its effects applied.
    Superseded,
}

/// One navigation attempt. Created per request, destroyed on settlement.
#[derive(Debug, Clone)]
struct NavigationRequest {
    id: Uuid,
    target: String,
    from: Location,
}

/// The navigation orchestrator.
///
/// Constructed once with injected dependencies and shared by reference by
/// whatever owns the UI shell; there is no ambient global router.
pub struct NavigationEngine<L: ViewLoader> {
    table: Arc<RouteTable>,
    guards: Vec<Arc<dyn NavigationGuard>>,
    loader: CachingLoader<L>,
    titles: TitleSynchronizer,
    audit: Arc<dyn AuditLogger>,
    history: History,
    policy: NavigationPolicy,
    current: RwLock<Location>,
    viewport: RwLock<ScrollPosition>,
    state: RwLock<EngineState>,
    generation: AtomicU64,
}

impl<L: ViewLoader> NavigationEngine<L> {
    /// Create an engine starting at the root location.
    pub fn new(
        table: Arc<RouteTable>,
        guards: Vec<Arc<dyn NavigationGuard>>,
        loader: L,
        titles: Arc<dyn TitleSink>,
        audit: Arc<dyn AuditLogger>,
        policy: NavigationPolicy,
    ) -> Self {
        let history = History::new(policy.history_capacity);
        let current = Location::parse("/");
        history.push(current.clone());
        Self {
            table,
            guards,
            loader: CachingLoader::new(loader),
            titles: TitleSynchronizer::new(titles),
            audit,
            history,
            policy,
            current: RwLock::new(current),
            viewport: RwLock::new(ScrollPosition::top()),
            state: RwLock::new(EngineState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Navigate to a full path such as `/cart?sku=42`.
    pub async fn navigate(&self, target: &str) -> Result<NavigationOutcome, EngineError> {
        self.drive(target, NavigationKind::New, None).await
    }

    /// Navigate back to the previous history entry, restoring its saved
    /// scroll offset. Settles as `Cancelled` when there is nowhere to go.
    pub async fn back(&self) -> Result<NavigationOutcome, EngineError> {
        let Some(entry) = self.history.back_target() else {
            return Ok(NavigationOutcome::Cancelled);
        };
        self.drive(
            &entry.location.full_path(),
            NavigationKind::Back,
            Some(entry.scroll),
        )
        .await
    }

    /// The location current after the last committed navigation.
    pub fn current(&self) -> Location {
        self.current.read().clone()
    }

    /// Viewport position as decided by the scroll restorer.
    pub fn viewport(&self) -> ScrollPosition {
        *self.viewport.read()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        *self.state.read()
    }

    /// Number of retained history entries.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of view modules resolved so far.
    pub fn cached_views(&self) -> usize {
        self.loader.cached()
    }

    /// Record the viewport offset for the current entry. Called by the UI
    /// shell as the user scrolls, so a later back navigation can restore it.
    pub fn record_scroll(&self, position: ScrollPosition) {
        self.history.record_scroll(position);
        *self.viewport.write() = position;
    }

    async fn drive(
        &self,
        target: &str,
        kind: NavigationKind,
        saved: Option<ScrollPosition>,
    ) -> Result<NavigationOutcome, EngineError> {
        let request = NavigationRequest {
            id: Uuid::new_v4(),
            target: target.to_string(),
            from: self.current.read().clone(),
        };
        let span = tracing::debug_span!(
            "navigate",
            request_id = %request.id,
            target = %request.target,
            kind = ?kind,
        );
        self.drive_inner(request, kind, saved).instrument(span).await
    }

    async fn drive_inner(
        &self,
        request: NavigationRequest,
        kind: NavigationKind,
        saved: Option<ScrollPosition>,
    ) -> Result<NavigationOutcome, EngineError> {
        // Starting a request abandons any in-flight one: its ticket goes
        // stale and its late results are discarded at the next check.
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.set_state(EngineState::Resolving);
        let mut to = Location::parse(&request.target);
        let mut hops = 0u32;

        loop {
            let Some(route) = self.table.match_path(&to.path) else {
                self.settle();
                return Err(EngineError::RouteNotFound(to.path));
            };
            to.matched = Some(route.clone());

            self.set_state(EngineState::GuardRunning);
            let mut verdict = GuardDecision::Allow;
            for guard in &self.guards {
                let decision = guard.check(&to, &request.from).await;
                if self.superseded(ticket) {
                    // A newer request owns the state machine now.
                    tracing::debug!(guard = guard.name(), "late guard result discarded");
                    return Ok(NavigationOutcome::Superseded);
                }
                if !decision.is_allow() {
                    tracing::debug!(guard = guard.name(), decision = ?decision, "guard short-circuited");
                    verdict = decision;
                    break;
                }
            }

            match verdict {
                GuardDecision::Allow => break,
                GuardDecision::Cancel => {
                    self.settle();
                    return Ok(NavigationOutcome::Cancelled);
                }
                GuardDecision::Redirect(next) => {
                    if hops >= self.policy.max_redirect_hops {
                        self.settle();
                        return Err(EngineError::RedirectLoop {
                            from: to.path,
                            to: next.path,
                        });
                    }
                    hops += 1;
                    self.set_state(EngineState::Resolving);
                    to = next;
                }
            }
        }

        self.set_state(EngineState::Loading);
        let Some(route) = to.matched.clone() else {
            // The loop above only breaks after a successful match.
            self.settle();
            return Err(EngineError::RouteNotFound(to.path));
        };
        let view = match self.loader.resolve(&route).await {
            Ok(view) => view,
            Err(failure) => {
                if self.superseded(ticket) {
                    return Ok(NavigationOutcome::Superseded);
                }
                tracing::warn!(error = %failure, "view load failed, committing fallback");
                let Some(fallback) = self.table.by_name(&self.policy.fallback_route) else {
                    self.settle();
                    return Err(EngineError::MissingFallback(
                        self.policy.fallback_route.clone(),
                    ));
                };
                let fallback = fallback.clone();
                let view = match self.loader.resolve(&fallback).await {
                    Ok(view) => view,
                    Err(failure) => {
                        self.settle();
                        return Err(EngineError::FallbackLoad(failure));
                    }
                };
                to.matched = Some(fallback);
                view
            }
        };
        if self.superseded(ticket) {
            tracing::debug!("late load result discarded");
            return Ok(NavigationOutcome::Superseded);
        }

        self.set_state(EngineState::Committing);
        let from = {
            let mut current = self.current.write();
            std::mem::replace(&mut *current, to.clone())
        };

        // A back navigation that reached its target unredirected pops the
        // abandoned entry; anything else appends a new one.
        if kind == NavigationKind::Back && hops == 0 {
            self.history.pop();
        } else {
            self.history.push(to.clone());
        }

        // Hooks, in order: title, scroll, audit.
        if let Some(route) = &to.matched {
            self.titles.apply(route);
        }
        let effective_kind = if hops == 0 { kind } else { NavigationKind::New };
        *self.viewport.write() = restore_position(effective_kind, saved);
        self.audit.record(&from, &to);

        self.settle();
        Ok(NavigationOutcome::Committed { location: to, view })
    }

    fn superseded(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }

    fn set_state(&self, state: EngineState) {
        *self.state.write() = state;
    }

    fn settle(&self) {
        self.set_state(EngineState::Settled);
        self.set_state(EngineState::Idle);
    }
}
