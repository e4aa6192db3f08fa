use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;
use rand::Rng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Vertices are `0..n`, all registered up front. Self-loops are skipped and
/// weights are drawn uniformly from `1..=max_weight`.
pub fn generate_random<R>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> Result<WeightedGraph<usize, u64>>
where
    R: Rng + ?Sized,
{
    let mut graph = WeightedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid with 4-connectivity in both directions.
///
/// Vertex `y * width + x` sits at column `x`, row `y`. Horizontal moves cost
/// `horizontal`, vertical moves cost `vertical`.
pub fn generate_grid(
    width: usize,
    height: usize,
    horizontal: u64,
    vertical: u64,
) -> Result<WeightedGraph<usize, u64>> {
    let mut graph = WeightedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge(current, current + 1, horizontal)?;
                graph.add_edge(current + 1, current, horizontal)?;
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, vertical)?;
                graph.add_edge(current + width, current, vertical)?;
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_has_expected_shape() {
        let graph = generate_grid(3, 2, 1, 2).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal links + 3 vertical links, both directions
        assert_eq!(graph.edge_count(), 2 * (4 + 3));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn random_graph_is_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random(50, 3.0, 20, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 50);
        assert!(graph.validate().is_ok());
        assert!(graph.edges().all(|(from, edge)| from != edge.to() && edge.weight() >= 1));
    }
}
