pub mod traits;
pub mod table;
pub mod dijkstra;

pub use traits::ShortestPathAlgorithm;
pub use table::{Distance, ShortestPathTable, TableEntry};
