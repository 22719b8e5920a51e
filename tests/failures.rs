//! Failure handling and the cancellation rule.
//!
//! Covers guard cancellation, the bounded redirect hop, fallback
//! configuration errors, and "last navigation started wins".

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use nav_kernel::{
    storefront_table, AuthGate, DocumentTitle, EngineError, EngineState, GuardDecision,
    InMemorySessionStore, InMemoryViewLoader, LoadFailure, Location, MemoryAuditLogger,
    NavigationEngine, NavigationGuard, NavigationOutcome, NavigationPolicy, RouteDefinition,
    RouteTable, TitleSink, ViewLoader, ViewModule,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn engine_with<L: ViewLoader>(
    table: RouteTable,
    guards: Vec<Arc<dyn NavigationGuard>>,
    loader: L,
) -> (
    Arc<NavigationEngine<L>>,
    Arc<DocumentTitle>,
    Arc<MemoryAuditLogger>,
) {
    let title = Arc::new(DocumentTitle::new());
    let audit = Arc::new(MemoryAuditLogger::new());
    let engine = Arc::new(NavigationEngine::new(
        Arc::new(table),
        guards,
        loader,
        title.clone(),
        audit.clone(),
        NavigationPolicy::default(),
    ));
    (engine, title, audit)
}

struct CancelAll;

#[async_trait]
impl NavigationGuard for CancelAll {
    fn name(&self) -> &'static str {
        "cancel-all"
    }

    async fn check(&self, _to: &Location, _from: &Location) -> GuardDecision {
        GuardDecision::Cancel
    }
}

/// Loader whose fetch for one route blocks until released, to hold a
/// navigation in `Loading` while another one starts.
struct GatedLoader {
    slow_route: &'static str,
    entered: Notify,
    release: Notify,
}

impl GatedLoader {
    fn new(slow_route: &'static str) -> Self {
        Self {
            slow_route,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ViewLoader for GatedLoader {
    async fn fetch(&self, route: &RouteDefinition) -> Result<ViewModule, LoadFailure> {
        if route.name == self.slow_route {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(ViewModule {
            route: route.name.clone(),
            chunk: route.module.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Guard cancellation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn cancel_settles_with_no_commit_and_no_hooks() {
    let loader = Arc::new(InMemoryViewLoader::new());
    let guards: Vec<Arc<dyn NavigationGuard>> = vec![Arc::new(CancelAll)];
    let (engine, title, audit) = engine_with(storefront_table(), guards, loader.clone());

    let outcome = engine.navigate("/products").await.unwrap();

    assert_eq!(outcome, NavigationOutcome::Cancelled);
    assert_eq!(engine.current().path, "/");
    assert_eq!(title.title(), "");
    assert!(audit.is_empty());
    assert_eq!(loader.fetches(), 0);
    assert_eq!(engine.state(), EngineState::Idle);
}

// ─────────────────────────────────────────────────────────────────────────────
// Redirect bound
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn redirect_to_a_denied_route_is_a_config_error() {
    // A protected login route makes the auth gate redirect to a route it
    // denies again, which must stop at the hop bound instead of looping.
    let table = RouteTable::new(vec![
        RouteDefinition::new("/", "Home", "views/Home"),
        RouteDefinition::new("/login", "Login", "views/Login").protected(),
        RouteDefinition::new("/secret", "Secret", "views/Secret").protected(),
        RouteDefinition::new("/*", "NotFound", "views/NotFound"),
    ])
    .unwrap();
    let session = Arc::new(InMemorySessionStore::new());
    let guards: Vec<Arc<dyn NavigationGuard>> = vec![Arc::new(AuthGate::new(session))];
    let (engine, _, audit) = engine_with(table, guards, InMemoryViewLoader::new());

    let err = engine.navigate("/secret").await.unwrap_err();

    assert!(matches!(err, EngineError::RedirectLoop { .. }));
    assert_eq!(engine.current().path, "/");
    assert!(audit.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Fallback configuration errors
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_fallback_route_is_a_config_error() {
    let table = RouteTable::new(vec![
        RouteDefinition::new("/", "Home", "views/Home"),
        RouteDefinition::new("/broken", "Broken", "views/Broken"),
    ])
    .unwrap();
    let loader = Arc::new(InMemoryViewLoader::new());
    loader.fail_route("Broken");
    let (engine, _, _) = engine_with(table, Vec::new(), loader);

    let err = engine.navigate("/broken").await.unwrap_err();
    assert_eq!(err, EngineError::MissingFallback("NotFound".to_string()));
    assert_eq!(engine.state(), EngineState::Idle);
}

#[tokio::test]
async fn unloadable_fallback_is_a_config_error() {
    let loader = Arc::new(InMemoryViewLoader::new());
    loader.fail_route("Products");
    loader.fail_route("NotFound");
    let (engine, _, _) = engine_with(storefront_table(), Vec::new(), loader);

    let err = engine.navigate("/products").await.unwrap_err();
    assert!(matches!(err, EngineError::FallbackLoad(_)));
    assert_eq!(engine.current().path, "/");
    assert_eq!(engine.state(), EngineState::Idle);
}

// ─────────────────────────────────────────────────────────────────────────────
// Last navigation started wins
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn second_navigation_supersedes_a_slow_first_one() {
    let loader = Arc::new(GatedLoader::new("Products"));
    let (engine, title, audit) = engine_with(storefront_table(), Vec::new(), loader.clone());

    let first = tokio::spawn({
        let engine = engine.clone();
        async move { engine.navigate("/products").await }
    });
    // Wait until the first request is suspended in its module fetch.
    loader.entered.notified().await;

    let second = engine.navigate("/services").await.unwrap();
    assert!(matches!(second, NavigationOutcome::Committed { .. }));

    // Release the stale fetch; its late result must be discarded.
    loader.release.notify_one();
    let first = first.await.unwrap().unwrap();
    assert_eq!(first, NavigationOutcome::Superseded);

    // Only the second navigation's effects ever applied.
    assert_eq!(engine.current().route_name(), Some("Services"));
    assert_eq!(title.title(), "微服务测试 - 电商微服务系统");
    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].to, "/services");
}

#[tokio::test]
async fn superseded_request_leaves_history_untouched() {
    let loader = Arc::new(GatedLoader::new("Orders"));
    let (engine, _, _) = engine_with(storefront_table(), Vec::new(), loader.clone());

    let first = tokio::spawn({
        let engine = engine.clone();
        async move { engine.navigate("/orders").await }
    });
    loader.entered.notified().await;

    engine.navigate("/products").await.unwrap();
    let before = engine.history_len();

    loader.release.notify_one();
    assert_eq!(first.await.unwrap().unwrap(), NavigationOutcome::Superseded);
    assert_eq!(engine.history_len(), before);
}
