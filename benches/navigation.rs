//! Performance benchmarks for route matching and navigation.
//!
//! Run with: `cargo bench --bench navigation`
//!
//! Matching and normalization sit on every navigation's hot path; the
//! full-navigation benchmark includes the guard pipeline and the warmed
//! view cache.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use nav_kernel::{
    storefront_table, AuthGate, DocumentTitle, InMemorySessionStore, InMemoryViewLoader, Location,
    NavigationEngine, NavigationGuard, NavigationPolicy, TracingAuditLogger,
};

fn bench_route_matching(c: &mut Criterion) {
    let table = storefront_table();
    let mut group = c.benchmark_group("route_matching");
    for path in ["/", "/products", "/cart", "/deep/unmatched/path"] {
        group.bench_with_input(BenchmarkId::from_parameter(path), &path, |b, &path| {
            b.iter(|| table.match_path(black_box(path)));
        });
    }
    group.finish();
}

fn bench_location_parse(c: &mut Criterion) {
    c.bench_function("location_parse", |b| {
        b.iter(|| Location::parse(black_box("/login?redirect=/cart&sku=42")));
    });
}

fn bench_full_navigation(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("bench runtime");

    let session = Arc::new(InMemorySessionStore::new());
    session.login("bench-token");
    let guards: Vec<Arc<dyn NavigationGuard>> = vec![Arc::new(AuthGate::new(session))];
    let engine = NavigationEngine::new(
        Arc::new(storefront_table()),
        guards,
        InMemoryViewLoader::new(),
        Arc::new(DocumentTitle::new()),
        Arc::new(TracingAuditLogger),
        NavigationPolicy::default(),
    );
    // Warm the view cache so the loop measures the steady-state path.
    runtime.block_on(async {
        engine.navigate("/products").await.expect("warmup");
        engine.navigate("/cart").await.expect("warmup");
    });

    c.bench_function("navigate_warm_cache", |b| {
        b.iter(|| {
            runtime
                .block_on(async {
                    engine.navigate(black_box("/products")).await?;
                    engine.navigate(black_box("/cart")).await
                })
                .expect("navigation")
        });
    });
}

criterion_group!(
    benches,
    bench_route_matching,
    bench_location_parse,
    bench_full_navigation
);
criterion_main!(benches);
