use std::collections::HashMap;
use std::fmt;

use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Best known distance to a vertex.
///
/// `Infinite` orders after every finite distance, so the derived `Ord` can be
/// used directly when comparing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Per-vertex record: best distance so far and the vertex it was reached from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry<V, W> {
    distance: Distance<W>,
    predecessor: Option<V>,
}

impl<V, W> TableEntry<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn unreached() -> Self {
        TableEntry {
            distance: Distance::Infinite,
            predecessor: None,
        }
    }

    pub fn distance(&self) -> Distance<W> {
        self.distance
    }

    pub fn predecessor(&self) -> Option<&V> {
        self.predecessor.as_ref()
    }
}

/// Distances and predecessors for every vertex of a graph, relative to one source.
///
/// Produced by a [`Dijkstra`](crate::Dijkstra) traversal. Paths are not stored;
/// [`path_to`](Self::path_to) walks predecessor links on demand.
#[derive(Debug, Clone)]
pub struct ShortestPathTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex the distances are measured from, once a traversal has chosen one
    source: Option<V>,

    /// Vertices in graph insertion order, for stable iteration
    order: Vec<V>,

    entries: HashMap<V, TableEntry<V, W>>,
}

impl<V, W> ShortestPathTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates one unreached entry per vertex of `graph`
    pub fn initialize_for<G>(graph: &G) -> Self
    where
        G: Graph<V, W> + ?Sized,
    {
        let order: Vec<V> = graph.vertices().cloned().collect();
        let entries = order
            .iter()
            .map(|vertex| (vertex.clone(), TableEntry::unreached()))
            .collect();

        ShortestPathTable {
            source: None,
            order,
            entries,
        }
    }

    /// Marks `vertex` as the source: distance zero, no predecessor.
    pub fn set_source(&mut self, vertex: V) -> Result<()> {
        self.set_distance(&vertex, Distance::Finite(W::zero()))?;
        self.set_predecessor(&vertex, None)?;
        self.source = Some(vertex);
        Ok(())
    }

    pub fn source(&self) -> Option<&V> {
        self.source.as_ref()
    }

    /// Returns the entry for `vertex`.
    ///
    /// `None` means the vertex was not part of the graph the table was
    /// initialized for.
    pub fn get(&self, vertex: &V) -> Option<&TableEntry<V, W>> {
        self.entries.get(vertex)
    }

    pub fn set_distance(&mut self, vertex: &V, distance: Distance<W>) -> Result<()> {
        self.entry_mut(vertex)?.distance = distance;
        Ok(())
    }

    pub fn set_predecessor(&mut self, vertex: &V, predecessor: Option<V>) -> Result<()> {
        self.entry_mut(vertex)?.predecessor = predecessor;
        Ok(())
    }

    /// Returns the candidate with the smallest distance.
    ///
    /// Ties go to the first candidate yielded, so `None` only comes back for an
    /// empty candidate set. Every candidate must be a vertex the table was
    /// initialized for; the engine only ever offers graph vertices. An unknown
    /// candidate trips a debug assertion and is skipped in release builds.
    pub fn find_open_vertex_with_shortest_distance<'a, I>(&self, open: I) -> Option<&'a V>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut best: Option<(&'a V, Distance<W>)> = None;
        for vertex in open {
            let Some(entry) = self.entries.get(vertex) else {
                debug_assert!(false, "open vertex {:?} has no table entry", vertex);
                continue;
            };
            match best {
                Some((_, distance)) if distance <= entry.distance => {}
                _ => best = Some((vertex, entry.distance)),
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    /// Finite distance to `vertex`, `None` if unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.get(vertex).and_then(|entry| entry.distance.finite())
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.get(vertex).and_then(TableEntry::predecessor)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reconstructs the path from the source to `target` by following predecessors.
    ///
    /// Fails with [`Error::NoPath`] if the chain ends anywhere but the source.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        let no_path = || Error::NoPath {
            from: self
                .source
                .as_ref()
                .map_or_else(|| "<no source>".to_string(), |source| format!("{:?}", source)),
            to: format!("{:?}", target),
        };

        if !self.entries.contains_key(target) {
            return Err(Error::UnknownVertex(format!("{:?}", target)));
        }
        let source = self.source.as_ref().ok_or_else(no_path)?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while current != source {
            current = self.predecessor(current).ok_or_else(no_path)?;
            path.push(current.clone());

            // A longer chain than there are vertices means the links loop
            if path.len() > self.entries.len() {
                return Err(Error::InvariantViolation(format!(
                    "predecessor chain of {:?} does not terminate",
                    target
                )));
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Iterates over `(vertex, entry)` in graph insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &TableEntry<V, W>)> + '_ {
        self.order
            .iter()
            .filter_map(move |vertex| self.entries.get(vertex).map(|entry| (vertex, entry)))
    }

    /// Iterates over reachable vertices and their distances
    pub fn reachable(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.iter()
            .filter_map(|(vertex, entry)| entry.distance.finite().map(|d| (vertex, d)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, vertex: &V) -> Result<&mut TableEntry<V, W>> {
        self.entries
            .get_mut(vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))
    }
}
