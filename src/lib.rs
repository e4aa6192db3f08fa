//! Weighted Paths - single-source shortest paths over weighted directed graphs
//!
//! The crate is built from three pieces that work together:
//! a [`WeightedGraph`] holding vertices and non-negatively weighted edges,
//! a [`MinPriorityQueue`] backing the frontier, and a [`ShortestPathTable`]
//! recording best distance and predecessor per vertex. [`Dijkstra`] drives
//! them to completion from one source vertex.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, FrontierStrategy, Phase, Traversal},
    table::{Distance, ShortestPathTable, TableEntry},
    ShortestPathAlgorithm,
};
pub use data_structures::MinPriorityQueue;
/// Re-export main types for convenient use
pub use graph::{Edge, GraphDocument, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Source vertex {0} not found in graph")]
    UnknownSource(String),

    #[error("Vertex {0} is referenced by an edge but was never added to the graph")]
    UnknownVertex(String),

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Distance overflow relaxing edge from {from} to {to}")]
    DistanceOverflow { from: String, to: String },

    #[error("Traversal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Malformed graph document: {0}")]
    Document(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
