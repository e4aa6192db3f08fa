use std::collections::HashMap;
use log::warn;

use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};

/// A weighted edge leaving some vertex of the graph.
///
/// Two edges are the same edge when both weight and target match, so parallel
/// edges towards one target are allowed as long as their weights differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    weight: W,
    to: V,
}

impl<V, W> Edge<V, W>
where
    V: Vertex,
    W: Weight,
{
    pub fn new(weight: W, to: V) -> Self {
        Edge { weight, to }
    }

    /// Weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Vertex the edge points to
    pub fn to(&self) -> &V {
        &self.to
    }
}

/// A directed graph implementation using adjacency lists keyed by vertex
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W = i64>
where
    V: Vertex,
    W: Weight,
{
    /// Vertices in the order they became known
    order: Vec<V>,

    /// Outgoing edges for each vertex: vertex -> [(weight, target)]
    outgoing_edges: HashMap<V, Vec<Edge<V, W>>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            order: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            order: Vec::with_capacity(vertices),
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Checks that every edge points at a registered vertex.
    ///
    /// Traversals fail with [`Error::UnknownVertex`] when they reach such an
    /// edge; this reports the first one up front.
    pub fn validate(&self) -> Result<()> {
        for vertex in &self.order {
            for edge in &self.outgoing_edges[vertex] {
                if !self.outgoing_edges.contains_key(edge.to()) {
                    return Err(Error::UnknownVertex(format!("{:?}", edge.to())));
                }
            }
        }
        Ok(())
    }

    /// Iterates over every edge as `(from, edge)` pairs, in vertex insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &Edge<V, W>)> + '_ {
        self.order.iter().flat_map(move |vertex| {
            self.outgoing_edges[vertex]
                .iter()
                .map(move |edge| (vertex, edge))
        })
    }

    fn edge_set_mut(&mut self, vertex: V) -> &mut Vec<Edge<V, W>> {
        if !self.outgoing_edges.contains_key(&vertex) {
            self.order.push(vertex.clone());
        }
        self.outgoing_edges.entry(vertex).or_default()
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.order.iter())
    }

    fn edges_of(&self, vertex: &V) -> Option<&[Edge<V, W>]> {
        self.outgoing_edges.get(vertex).map(Vec::as_slice)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.edge_set_mut(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<bool> {
        if weight < W::zero() {
            warn!("Rejecting edge {:?} -> {:?} with negative weight {:?}", from, to, weight);
            return Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }

        // `to` only becomes a vertex once added on its own
        let edge = Edge::new(weight, to);
        let edges = self.edge_set_mut(from);
        if edges.contains(&edge) {
            return Ok(false);
        }
        edges.push(edge);
        Ok(true)
    }
}
