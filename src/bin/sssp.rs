use serde::Serialize;
use std::env;
use std::fs;
use weighted_paths::algorithm::ShortestPathAlgorithm;
use weighted_paths::{Dijkstra, FrontierStrategy, GraphDocument, WeightedGraph};

/// One row of the report
#[derive(Debug, Serialize)]
struct VertexReport {
    vertex: String,
    /// `null` when unreachable
    distance: Option<i64>,
    predecessor: Option<String>,
}

#[derive(Debug, Serialize)]
struct TraversalReport {
    algorithm: &'static str,
    source: String,
    vertices: Vec<VertexReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

fn frontier_from_env() -> Result<FrontierStrategy, String> {
    match env::var("SSSP_FRONTIER").as_deref() {
        Err(_) | Ok("heap") => Ok(FrontierStrategy::BinaryHeap),
        Ok("scan") => Ok(FrontierStrategy::OpenSetScan),
        Ok(other) => Err(format!("SSSP_FRONTIER must be 'heap' or 'scan', got '{}'", other)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <graph.json> <source> [target]", args[0]);
        std::process::exit(2);
    }
    let source = args[2].clone();
    let target = args.get(3).cloned();

    let json = fs::read_to_string(&args[1])?;
    let graph = GraphDocument::<String, i64>::from_json(&json)?.into_graph()?;

    let dijkstra = Dijkstra::new().with_frontier(frontier_from_env()?);
    let table = dijkstra.compute_shortest_paths(&graph, &source)?;

    let path = match &target {
        Some(target) => Some(table.path_to(target)?),
        None => None,
    };

    let report = TraversalReport {
        algorithm: <Dijkstra as ShortestPathAlgorithm<String, i64, WeightedGraph<String, i64>>>::name(&dijkstra),
        source,
        vertices: table
            .iter()
            .map(|(vertex, entry)| VertexReport {
                vertex: vertex.clone(),
                distance: entry.distance().finite(),
                predecessor: entry.predecessor().cloned(),
            })
            .collect(),
        path,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
