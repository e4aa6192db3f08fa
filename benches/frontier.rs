use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_paths::algorithm::ShortestPathAlgorithm;
use weighted_paths::graph::generators::{generate_grid, generate_random};
use weighted_paths::{Dijkstra, FrontierStrategy, MinPriorityQueue, WeightedGraph};

type BenchGraph = WeightedGraph<usize, u64>;

fn run(dijkstra: &Dijkstra, graph: &BenchGraph) {
    let table = <Dijkstra as ShortestPathAlgorithm<usize, u64, BenchGraph>>::compute_shortest_paths(dijkstra, graph, &0)
        .unwrap();
    black_box(table);
}

fn bench_frontiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_frontier");
    let mut rng = StdRng::seed_from_u64(42);
    let heap = Dijkstra::new();
    let scan = Dijkstra::new().with_frontier(FrontierStrategy::OpenSetScan);

    for &n in &[250usize, 1_000, 2_000] {
        let graph = generate_random(n, 4.0, 100, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &graph, |b, g| b.iter(|| run(&heap, g)));
        group.bench_with_input(BenchmarkId::new("open_set_scan", n), &graph, |b, g| b.iter(|| run(&scan, g)));
    }

    let grid = generate_grid(40, 40, 1, 3).unwrap();
    group.bench_function("binary_heap_grid_40x40", |b| b.iter(|| run(&heap, &grid)));
    group.finish();
}

fn bench_priority_queue(c: &mut Criterion) {
    c.bench_function("min_priority_queue_insert_extract_1000", |b| {
        b.iter(|| {
            let mut pq = MinPriorityQueue::with_capacity(1000);
            for i in (0..1000u32).rev() {
                pq.insert(black_box(i), i);
            }
            while let Some(x) = pq.extract_min() {
                black_box(x);
            }
        });
    });
}

criterion_group!(benches, bench_frontiers, bench_priority_queue);
criterion_main!(benches);
