use crate::algorithm::table::ShortestPathTable;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTable<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathTable<V, W>, target: &V) -> Result<Vec<V>> {
        result.path_to(target)
    }
}
