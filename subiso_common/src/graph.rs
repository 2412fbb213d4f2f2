//! Dense, integer-indexed directed graphs.
//!
//! A [`Graph`] stores for every vertex the list of its direct successors.
//! Undirected graphs are expressed by inserting both directions of an edge.
//! The search only ever reads a graph; mutation is limited to the builder
//! methods used before a search starts.

use std::collections::HashSet;

use tracing::debug;

use crate::{GraphError, VertexId};

/// A directed graph over the vertices `0..vertex_count()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// Successor lists in insertion order, one per vertex.
    successors: Vec<Vec<VertexId>>,
    /// Every `(from, to)` pair present in `successors`.
    edge_set: HashSet<(VertexId, VertexId)>,
}

impl Graph {
    /// Creates a graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); vertex_count],
            edge_set: HashSet::new(),
        }
    }

    /// Builds a graph from a list of directed edges.
    ///
    /// The vertex count is the smallest one covering every endpoint.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Builds an undirected graph, inserting both directions of every edge.
    #[must_use]
    pub fn from_undirected_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_undirected_edge(a, b);
        }
        graph
    }

    /// Builds a graph from raw successor lists without any range checking.
    ///
    /// This is the only way to construct a graph whose edges point outside
    /// `0..vertex_count()`. See [`Graph::validate`] for detecting that.
    #[must_use]
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        let mut graph = Self::with_vertices(adjacency.len());
        for (from, targets) in adjacency.into_iter().enumerate() {
            let from = VertexId::from(from);
            for to in targets {
                graph.insert(from, VertexId::from(to));
            }
        }
        graph
    }

    /// Appends an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.successors.push(Vec::new());
        VertexId::from(self.successors.len() - 1)
    }

    /// Inserts the directed edge `from -> to`.
    ///
    /// The vertex set grows to cover both endpoints. Returns `false` if the
    /// edge was already present.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        self.ensure_vertex(from.max(to));
        self.insert(VertexId::from(from), VertexId::from(to))
    }

    /// Inserts both `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> bool {
        let forward = self.add_edge(a, b);
        let backward = self.add_edge(b, a);
        forward || backward
    }

    /// Grows the vertex set so that `vertex` is a valid id.
    fn ensure_vertex(&mut self, vertex: usize) {
        if vertex >= self.successors.len() {
            self.successors.resize_with(vertex + 1, Vec::new);
        }
    }

    /// Records an edge whose tail is known to be in range.
    fn insert(&mut self, from: VertexId, to: VertexId) -> bool {
        if !self.edge_set.insert((from, to)) {
            return false;
        }
        self.successors[from.as_usize()].push(to);
        true
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Returns the number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Iterates over all vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertex_count()).map(VertexId::from)
    }

    /// Returns the direct successors of `vertex`, in insertion order.
    ///
    /// An out-of-range vertex has no successors.
    #[must_use]
    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        self.successors
            .get(vertex.as_usize())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns true if the directed edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_set.contains(&(from, to))
    }

    /// Iterates over every directed edge, grouped by tail in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (VertexId::from(from), to)))
    }

    /// Checks that every edge endpoint lies inside `0..vertex_count()`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeOutOfRange`] for the first offending edge.
    pub fn validate(&self) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        match self.edges().find(|(_, to)| to.as_usize() >= vertex_count) {
            Some((from, to)) => {
                debug!("graph rejected: edge {} -> {} is out of range", from, to);
                Err(GraphError::EdgeOutOfRange {
                    from,
                    to,
                    vertex_count,
                })
            }
            None => Ok(()),
        }
    }
}
