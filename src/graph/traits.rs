use std::fmt::Debug;
use std::hash::Hash;
use num_traits::PrimInt;

use crate::graph::Edge;
use crate::Result;

/// Identifier of a vertex. Anything cloneable, hashable and comparable qualifies.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Edge weights and path distances are exact integers.
///
/// Signed types are accepted so that a negative weight can be expressed at the
/// call site and rejected by the graph.
pub trait Weight: PrimInt + Hash + Debug {}

impl<T> Weight for T where T: PrimInt + Hash + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every known vertex, in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns the outgoing edges of a vertex.
    ///
    /// `None` means the vertex was never added, which is not the same as a
    /// vertex without outgoing edges (`Some` of an empty slice).
    fn edges_of(&self, vertex: &V) -> Option<&[Edge<V, W>]>;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: &V) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex to the graph. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge with the given weight.
    ///
    /// Returns `Ok(false)` when the exact same (weight, target) edge already
    /// leaves `from`.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<bool>;
}
