pub mod traits;
pub mod weighted;
pub mod document;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use weighted::{Edge, WeightedGraph};
pub use document::{EdgeRecord, GraphDocument};
