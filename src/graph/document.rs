use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::graph::WeightedGraph;
use crate::{Error, Result};

/// Serializable description of a graph.
///
/// ```json
/// { "vertices": ["A", "B"], "edges": [{ "from": "A", "to": "B", "weight": 4 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, W: Deserialize<'de>"))]
pub struct GraphDocument<V, W> {
    #[serde(default)]
    pub vertices: Vec<V>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord<V, W>>,
}

/// One edge of a [`GraphDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> GraphDocument<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Builds the graph this document describes.
    ///
    /// Fails with [`Error::InvalidWeight`] on a negative weight and with
    /// [`Error::UnknownVertex`] when an edge targets a vertex that is neither
    /// listed nor the source of another edge.
    pub fn into_graph(self) -> Result<WeightedGraph<V, W>> {
        let mut graph = WeightedGraph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for record in self.edges {
            graph.add_edge(record.from, record.to, record.weight)?;
        }
        graph.validate()?;
        Ok(graph)
    }

    pub fn from_graph(graph: &WeightedGraph<V, W>) -> Self {
        GraphDocument {
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, edge)| EdgeRecord {
                    from: from.clone(),
                    to: edge.to().clone(),
                    weight: edge.weight(),
                })
                .collect(),
        }
    }
}

impl<V, W> GraphDocument<V, W>
where
    V: Vertex + Serialize + for<'de> Deserialize<'de>,
    W: Weight + Serialize + for<'de> Deserialize<'de>,
{
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Document(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Document(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_graph_from_json() {
        let json = r#"{
            "vertices": ["A", "B", "C"],
            "edges": [
                { "from": "A", "to": "B", "weight": 1 },
                { "from": "B", "to": "C", "weight": 2 }
            ]
        }"#;
        let graph = GraphDocument::<String, i64>::from_json(json)
            .unwrap()
            .into_graph()
            .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_of(&"B".to_string()).unwrap()[0].weight(), 2);
    }

    #[test]
    fn rejects_negative_weights() {
        let json = r#"{ "vertices": ["A", "B"], "edges": [{ "from": "A", "to": "B", "weight": -3 }] }"#;
        let err = GraphDocument::<String, i64>::from_json(json)
            .unwrap()
            .into_graph()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }));
    }

    #[test]
    fn rejects_dangling_edge_targets() {
        let json = r#"{ "vertices": ["A"], "edges": [{ "from": "A", "to": "Z", "weight": 1 }] }"#;
        let err = GraphDocument::<String, i64>::from_json(json)
            .unwrap()
            .into_graph()
            .unwrap_err();
        assert_eq!(err, Error::UnknownVertex("\"Z\"".to_string()));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc = GraphDocument::<String, i64>::from_json(r#"{ "vertices": ["A"] }"#).unwrap();
        assert!(doc.edges.is_empty());
        let graph = doc.into_graph().unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edges_of(&"A".to_string()), Some(&[][..]));

        let doc = GraphDocument::<String, i64>::from_json(
            r#"{ "edges": [{ "from": "A", "to": "A", "weight": 2 }] }"#,
        )
        .unwrap();
        assert!(doc.vertices.is_empty());
        let graph = doc.into_graph().unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);

        let empty = GraphDocument::<u32, u32>::from_json("{}").unwrap();
        assert_eq!(empty.into_graph().unwrap().vertex_count(), 0);
    }

    #[test]
    fn malformed_json_is_a_document_error() {
        let err = GraphDocument::<String, i64>::from_json("{ \"edges\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Document(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let mut graph: WeightedGraph<u32, u32> = WeightedGraph::new();
        graph.add_edge(1, 2, 9).unwrap();
        graph.add_vertex(2);

        let json = GraphDocument::from_graph(&graph).to_json_pretty().unwrap();
        let rebuilt = GraphDocument::<u32, u32>::from_json(&json)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(GraphDocument::from_graph(&rebuilt), GraphDocument::from_graph(&graph));
    }
}
