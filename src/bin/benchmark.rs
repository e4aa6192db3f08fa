use std::time::{Duration, Instant};
use weighted_paths::algorithm::ShortestPathAlgorithm;
use weighted_paths::graph::generators::generate_random;
use weighted_paths::graph::Graph;
use weighted_paths::{Dijkstra, FrontierStrategy, WeightedGraph};

type BenchGraph = WeightedGraph<usize, u64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &BenchGraph, source: usize) -> Result<Duration, weighted_paths::Error>
where
    A: ShortestPathAlgorithm<usize, u64, BenchGraph>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = result.reachable().count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The open-set scan is quadratic, keep sizes modest
    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: heap frontier vs open-set scan");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let heap = Dijkstra::new();
    let scan = Dijkstra::new().with_frontier(FrontierStrategy::OpenSetScan);

    let mut results = Vec::new();
    let mut rng = rand::thread_rng();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100, &mut rng)?;
        let source = 0;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_algorithm("Dijkstra (binary heap)", &heap, &graph, source)?;
        let scan_time = benchmark_algorithm("Dijkstra (open-set scan)", &scan, &graph, source)?;

        results.push((size, heap_time, scan_time));

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - heap vs scan: {:.2}x", speedup);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Heap (ms)", "Scan (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, heap_time, scan_time) in &results {
        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            heap_time.as_millis(),
            scan_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
