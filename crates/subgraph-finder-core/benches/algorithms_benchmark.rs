//! Benchmarks for the heavier subgraph searches.
//!
//! Measures:
//! - maximum clique enumeration on sparse random graphs
//! - FastGreedy and Walktrap community detection
//! - conditioned BFS with edge preservation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subgraph_finder_core::algo::{
    Algorithm, BronKerbosch, CliqueConfig, ClusteringConfig, ConditionedSearch, FastGreedy,
    SearchConfig, Walktrap,
};
use subgraph_finder_core::graph::{Condition, EdgeSpec, Graph, GraphDescription};

/// Undirected random graph with `n` nodes and about `n * degree / 2` edges.
fn random_graph(n: usize, degree: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut description =
        GraphDescription::new(format!("random-{n}")).with_nodes((0..n).map(|i| format!("N{i}")));
    for _ in 0..n * degree / 2 {
        let s = rng.gen_range(0..n);
        let t = rng.gen_range(0..n);
        if s == t {
            continue;
        }
        let weight = f64::from(rng.gen_range(1_u32..10));
        description = description.with_edge(EdgeSpec::undirected(
            format!("N{s}"),
            format!("N{t}"),
            weight,
        ));
    }
    description.build().expect("random graph builds")
}

fn bench_cliques(c: &mut Criterion) {
    let mut group = c.benchmark_group("bron_kerbosch");
    let search = BronKerbosch::new(CliqueConfig::default());
    for n in [50, 200, 500] {
        let graph = random_graph(n, 8, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| black_box(search.run(graph).expect("clique search")));
        });
    }
    group.finish();
}

fn bench_communities(c: &mut Criterion) {
    let mut group = c.benchmark_group("communities");
    group.sample_size(20);
    let graph = random_graph(200, 6, 11);

    let fast_greedy = FastGreedy::new(ClusteringConfig::default());
    group.bench_function("fast_greedy_200", |b| {
        b.iter(|| black_box(fast_greedy.run(&graph).expect("fast greedy")));
    });

    let walktrap = Walktrap::new(ClusteringConfig::default().with_weighted(true));
    group.bench_function("walktrap_200_weighted", |b| {
        b.iter(|| black_box(walktrap.run(&graph).expect("walktrap")));
    });
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let graph = random_graph(100, 6, 3);
    let search = ConditionedSearch::breadth_first(SearchConfig::new(vec![Condition::Bipartite]));
    c.bench_function("bfs_bipartite_100", |b| {
        b.iter(|| black_box(search.run(&graph).expect("bfs")));
    });
}

criterion_group!(benches, bench_cliques, bench_communities, bench_traversal);
criterion_main!(benches);
