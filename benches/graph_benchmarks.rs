use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waypoint::algo;
use waypoint::graph::GraphStore;

/// Random connected graph: a spanning chain plus extra random edges.
/// Seeded so every run benchmarks the same topology.
fn random_store(nodes: usize, extra_edges: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = GraphStore::new();
    for i in 0..nodes {
        store.add_node(format!("N{i}")).unwrap();
    }
    for i in 1..nodes {
        store
            .add_edge(format!("N{}", i - 1), format!("N{i}"), rng.gen_range(1.0..10.0))
            .unwrap();
    }
    for _ in 0..extra_edges {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        store
            .add_edge(format!("N{from}"), format!("N{to}"), rng.gen_range(1.0..10.0))
            .unwrap();
    }
    store
}

/// Like `random_store` but acyclic: extra edges only point forward,
/// so topological sort always succeeds.
fn random_dag(nodes: usize, extra_edges: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = GraphStore::new();
    for i in 0..nodes {
        store.add_node(format!("N{i}")).unwrap();
    }
    for i in 1..nodes {
        store
            .add_edge(format!("N{}", i - 1), format!("N{i}"), 1.0)
            .unwrap();
    }
    for _ in 0..extra_edges {
        let from = rng.gen_range(0..nodes - 1);
        let to = rng.gen_range(from + 1..nodes);
        store
            .add_edge(format!("N{from}"), format!("N{to}"), 1.0)
            .unwrap();
    }
    store
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for size in [100, 1000, 5000] {
        let store = random_store(size, size * 2, 42);
        let source = "N0".into();
        let target = format!("N{}", size - 1).into();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let result = algo::shortest_path(&store, &source, &target).unwrap();
                criterion::black_box(result);
            });
        });
    }
    group.finish();
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_spanning_forest");
    for size in [100, 1000, 5000] {
        let store = random_store(size, size * 2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let forest = algo::minimum_spanning_forest(&store);
                criterion::black_box(forest.total_weight);
            });
        });
    }
    group.finish();
}

fn bench_topological_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_order");
    for size in [100, 1000, 5000] {
        let store = random_dag(size, size * 2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let order = algo::topological_order(&store).unwrap();
                criterion::black_box(order.len());
            });
        });
    }
    group.finish();
}

fn bench_mutation_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_mutation");
    for size in [100, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let store = random_store(size, size, 7);
                criterion::black_box(store.edge_count());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_mst,
    bench_topological_order,
    bench_mutation_throughput,
);
criterion_main!(benches);
