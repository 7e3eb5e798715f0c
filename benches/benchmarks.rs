//! Criterion benchmarks for listgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use listgraph::graph::ListGraph;

/// Build a random connected graph: a spanning chain plus random extra edges.
fn make_large_graph(node_count: u32, extra_edges_per_node: usize) -> ListGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = ListGraph::with_capacity(node_count as usize);
    for i in 0..node_count {
        graph.add(i);
    }
    for i in 1..node_count {
        let _ = graph.connect(&(i - 1), &i, "chain", rng.gen_range(1.0..100.0));
    }
    for i in 0..node_count {
        for _ in 0..extra_edges_per_node {
            let target = rng.gen_range(0..node_count);
            // Duplicates and self-connections are rejected; that is fine here.
            let _ = graph.connect(&i, &target, "extra", rng.gen_range(1.0..100.0));
        }
    }
    graph
}

fn bench_connect(c: &mut Criterion) {
    c.bench_function("connect_10k_nodes_3_edges_each", |b| {
        b.iter(|| black_box(make_large_graph(10_000, 3)))
    });
}

fn bench_path_exists(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);
    c.bench_function("path_exists_10k", |b| {
        b.iter(|| black_box(graph.path_exists(&0, &9_999)))
    });
}

fn bench_path(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);
    c.bench_function("path_10k", |b| {
        b.iter(|| black_box(graph.path(&0, &9_999).map(|p| p.map(|edges| edges.len()))))
    });
}

fn bench_remove(c: &mut Criterion) {
    let graph = make_large_graph(2_000, 5);
    c.bench_function("remove_hub_node_2k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                let _ = g.remove(&1_000);
                g
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_connect,
    bench_path_exists,
    bench_path,
    bench_remove
);
criterion_main!(benches);
