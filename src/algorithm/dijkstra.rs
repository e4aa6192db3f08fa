use std::collections::{HashMap, HashSet, VecDeque};
use log::{debug, trace};

use crate::algorithm::table::{Distance, ShortestPathTable, TableEntry};
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// How the next vertex to close is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Binary min-heap with lazy deletion, O(log V) per selection
    #[default]
    BinaryHeap,
    /// Scan every open vertex through the table, O(V) per selection
    OpenSetScan,
}

/// Where a [`Traversal`] currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Table initialized, source at distance zero, nothing closed yet
    Init,
    /// At least one vertex closed, some still open
    Relaxing,
    /// Every vertex closed, or the traversal stopped on an error
    Done,
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    frontier: FrontierStrategy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the heap frontier
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the frontier selection strategy
    pub fn with_frontier(mut self, frontier: FrontierStrategy) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn frontier(&self) -> FrontierStrategy {
        self.frontier
    }

    /// Starts a traversal that can be driven one vertex at a time.
    ///
    /// Fails with [`Error::UnknownSource`] before touching any state if
    /// `source` is not a vertex of `graph`.
    pub fn traverse<'g, V, W, G>(&self, graph: &'g G, source: &V) -> Result<Traversal<'g, V, W, G>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        Traversal::new(graph, source, self.frontier)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        match self.frontier {
            FrontierStrategy::BinaryHeap => "Dijkstra (binary heap)",
            FrontierStrategy::OpenSetScan => "Dijkstra (open-set scan)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTable<V, W>> {
        self.traverse(graph, source)?.finish()
    }
}

/// A single run of Dijkstra's algorithm over a borrowed graph.
///
/// Every graph vertex starts open. Each [`step`](Self::step) closes the open
/// vertex with the smallest distance after relaxing its outgoing edges; a
/// closed vertex's table entry never changes again. The graph must not be
/// mutated while a traversal borrows it.
#[derive(Debug)]
pub struct Traversal<'g, V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    graph: &'g G,
    table: ShortestPathTable<V, W>,
    open: HashSet<V>,
    strategy: FrontierStrategy,
    /// Heap frontier; may hold stale entries for vertices closed since
    heap: MinPriorityQueue<W, V>,
    /// Open vertices left once the heap ran dry, all unreachable
    stranded: Option<VecDeque<V>>,
    /// Unreached vertices whose only known path overflowed `W`, keyed to the edge's source
    overflowed: HashMap<V, V>,
    phase: Phase,
    closed: usize,
}

impl<'g, V, W, G> Traversal<'g, V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    pub fn new(graph: &'g G, source: &V, strategy: FrontierStrategy) -> Result<Self> {
        if !graph.contains_vertex(source) {
            return Err(Error::UnknownSource(format!("{:?}", source)));
        }

        let mut table = ShortestPathTable::initialize_for(graph);
        table.set_source(source.clone())?;

        let open: HashSet<V> = graph.vertices().cloned().collect();
        let mut heap = MinPriorityQueue::new();
        if strategy == FrontierStrategy::BinaryHeap {
            heap.insert(W::zero(), source.clone());
        }

        debug!(
            "Starting traversal from {:?} over {} vertices ({:?} frontier)",
            source,
            open.len(),
            strategy
        );

        Ok(Traversal {
            graph,
            table,
            open,
            strategy,
            heap,
            stranded: None,
            overflowed: HashMap::new(),
            phase: Phase::Init,
            closed: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The table as it stands; entries of closed vertices are final
    pub fn table(&self) -> &ShortestPathTable<V, W> {
        &self.table
    }

    /// True once `vertex` has been finalized
    pub fn is_closed(&self, vertex: &V) -> bool {
        self.table.get(vertex).is_some() && !self.open.contains(vertex)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed
    }

    /// Closes the next vertex and returns it, or `None` once the traversal is done.
    ///
    /// An error ends the traversal: the phase moves to [`Phase::Done`] and the
    /// table is left as it was when the error surfaced.
    pub fn step(&mut self) -> Result<Option<V>> {
        if self.phase == Phase::Done {
            return Ok(None);
        }
        self.phase = Phase::Relaxing;

        match self.close_next() {
            Ok(vertex) => {
                if self.open.is_empty() {
                    self.phase = Phase::Done;
                    debug!(
                        "Traversal done: {} vertices closed, {} reachable",
                        self.closed,
                        self.table.reachable().count()
                    );
                }
                Ok(Some(vertex))
            }
            Err(e) => {
                self.phase = Phase::Done;
                debug!("Traversal aborted: {}", e);
                Err(e)
            }
        }
    }

    /// Runs the traversal to completion and hands back the table
    pub fn finish(mut self) -> Result<ShortestPathTable<V, W>> {
        while self.step()?.is_some() {}
        Ok(self.table)
    }

    fn close_next(&mut self) -> Result<V> {
        let vertex = match self.strategy {
            FrontierStrategy::BinaryHeap => self.pop_heap(),
            FrontierStrategy::OpenSetScan => self.scan_open(),
        }
        .ok_or_else(|| {
            Error::InvariantViolation(format!(
                "{} vertices open but none selectable",
                self.open.len()
            ))
        })?;

        let distance = self
            .table
            .get(&vertex)
            .map(TableEntry::distance)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))?;

        // Closing at infinity means no representable path beat the overflowing one
        if distance == Distance::Infinite {
            if let Some(from) = self.overflowed.get(&vertex) {
                return Err(Error::DistanceOverflow {
                    from: format!("{:?}", from),
                    to: format!("{:?}", vertex),
                });
            }
        }
        self.relax_edges_of(&vertex, distance)?;

        self.open.remove(&vertex);
        self.closed += 1;
        trace!("Closed {:?} at distance {:?}", vertex, distance);

        Ok(vertex)
    }

    fn pop_heap(&mut self) -> Option<V> {
        while let Some(vertex) = self.heap.extract_min() {
            if self.open.contains(&vertex) {
                return Some(vertex);
            }
        }

        // Anything still open was never reached; close it in graph order
        let graph = self.graph;
        let open = &self.open;
        self.stranded
            .get_or_insert_with(|| graph.vertices().filter(|v| open.contains(*v)).cloned().collect())
            .pop_front()
    }

    fn scan_open(&self) -> Option<V> {
        let open = &self.open;
        self.table
            .find_open_vertex_with_shortest_distance(self.graph.vertices().filter(|v| open.contains(*v)))
            .cloned()
    }

    fn relax_edges_of(&mut self, from: &V, distance: Distance<W>) -> Result<()> {
        let graph = self.graph;
        let edges = graph.edges_of(from).ok_or_else(|| {
            Error::InvariantViolation(format!("edge set of {:?} vanished during traversal", from))
        })?;

        for edge in edges {
            let target = edge.to();
            if !self.open.contains(target) {
                if self.table.get(target).is_none() {
                    return Err(Error::UnknownVertex(format!("{:?}", target)));
                }
                continue;
            }

            let Distance::Finite(base) = distance else {
                continue;
            };
            let current = self
                .table
                .get(target)
                .map(TableEntry::distance)
                .ok_or_else(|| Error::UnknownVertex(format!("{:?}", target)))?;

            // An overflowing sum can never beat a finite distance. Against an
            // infinite one it only matters if nothing representable turns up.
            let Some(candidate) = base.checked_add(&edge.weight()) else {
                if current == Distance::Infinite {
                    trace!("Sum overflows relaxing {:?} -> {:?}", from, target);
                    self.overflowed.entry(target.clone()).or_insert_with(|| from.clone());
                }
                continue;
            };
            if Distance::Finite(candidate) < current {
                self.table.set_distance(target, Distance::Finite(candidate))?;
                self.table.set_predecessor(target, Some(from.clone()))?;
                if self.strategy == FrontierStrategy::BinaryHeap {
                    self.heap.insert(candidate, target.clone());
                }
                trace!("Relaxed {:?} -> {:?}: {:?} -> {:?}", from, target, current, candidate);
            }
        }

        Ok(())
    }
}
