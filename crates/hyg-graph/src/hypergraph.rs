use std::collections::{BTreeMap, BTreeSet};

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;

use crate::edge::Edge;

/// Weight assigned to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Mutable hypergraph: a vertex set, a weighted edge set, and a directedness
/// flag that every edge must agree with.
///
/// The weight function is stored as a single map keyed by edge, so an edge
/// and its weight entry are inserted and removed atomically; there is never
/// an edge without a weight or a weight for a non-existent edge. All
/// collections are ordered, which makes iteration and every derived
/// computation deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypergraph<V: Vertex> {
    directed: bool,
    vertices: BTreeSet<V>,
    edges: BTreeMap<Edge<V>, f64>,
}

impl<V: Vertex> Hypergraph<V> {
    /// Creates an empty hypergraph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Builds a hypergraph from initial vertex and weighted edge collections.
    ///
    /// Every edge is validated against the directedness flag before any state
    /// is committed; the first invalid edge aborts construction. Edge vertices
    /// are unioned into the vertex set.
    pub fn from_parts(
        directed: bool,
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (Edge<V>, f64)>,
    ) -> Result<Self, HygError> {
        let mut graph = Self::new(directed);
        graph.vertices.extend(vertices);
        let staged: Vec<(Edge<V>, f64)> = edges.into_iter().collect();
        for (edge, _) in &staged {
            graph.check_directedness(edge)?;
        }
        for (edge, weight) in staged {
            graph.vertices.extend(edge.vertices().iter().cloned());
            graph.edges.insert(edge, weight);
        }
        Ok(graph)
    }

    /// Builds a hypergraph from edges alone, assigning [`DEFAULT_WEIGHT`] to
    /// each and taking the vertex set as the union of the edges.
    pub fn from_edges(
        directed: bool,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Result<Self, HygError> {
        Self::from_parts(
            directed,
            std::iter::empty(),
            edges.into_iter().map(|edge| (edge, DEFAULT_WEIGHT)),
        )
    }

    /// Returns the directedness of the hypergraph.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Returns the vertex set.
    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges in their total order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.edges.keys()
    }

    /// Iterates over the edges together with their weights.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&Edge<V>, f64)> + '_ {
        self.edges.iter().map(|(edge, weight)| (edge, *weight))
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the weight of an edge, or `None` if the edge is absent.
    pub fn weight(&self, edge: &Edge<V>) -> Option<f64> {
        self.edges.get(edge).copied()
    }

    /// Returns whether the hypergraph contains the given vertex.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns whether the hypergraph contains the given edge.
    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.edges.contains_key(edge)
    }

    /// Adds a vertex. Inserting an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex);
    }

    /// Removes a vertex and every incident edge (with its weight).
    ///
    /// Fails with `unknown-vertex` when the vertex is absent, leaving the
    /// hypergraph unchanged.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), HygError> {
        if !self.vertices.contains(vertex) {
            return Err(HygError::Graph(
                ErrorInfo::new("unknown-vertex", "vertex does not exist")
                    .with_context("vertex", format!("{vertex:?}")),
            ));
        }
        let incident: Vec<Edge<V>> = self
            .edges
            .keys()
            .filter(|edge| edge.contains(vertex))
            .cloned()
            .collect();
        for edge in incident {
            self.edges.remove(&edge);
        }
        self.vertices.remove(vertex);
        Ok(())
    }

    /// Adds an edge with the given weight, unioning its vertices into the
    /// vertex set.
    ///
    /// Fails with `directedness-mismatch` when the edge's directedness
    /// disagrees with the hypergraph's; nothing is committed on failure.
    pub fn add_edge(&mut self, edge: Edge<V>, weight: f64) -> Result<(), HygError> {
        self.check_directedness(&edge)?;
        self.vertices.extend(edge.vertices().iter().cloned());
        self.edges.insert(edge, weight);
        Ok(())
    }

    /// Removes an edge and its weight entry, returning the detached weight.
    ///
    /// Fails with `unknown-edge` when the edge is absent.
    pub fn remove_edge(&mut self, edge: &Edge<V>) -> Result<f64, HygError> {
        self.edges.remove(edge).ok_or_else(|| {
            HygError::Graph(
                ErrorInfo::new("unknown-edge", "edge does not exist")
                    .with_context("edge", format!("{:?}", edge.vertices())),
            )
        })
    }

    /// Returns whether every edge has exactly `k` vertices.
    ///
    /// When `k` is `None` it is inferred from an arbitrary edge; a hypergraph
    /// without edges is vacuously uniform.
    pub fn uniform(&self, k: Option<usize>) -> bool {
        let k = match k {
            Some(k) => k,
            None => match self.edges.keys().next() {
                Some(edge) => edge.arity(),
                None => return true,
            },
        };
        self.edges.keys().all(|edge| edge.arity() == k)
    }

    /// Returns whether every vertex has weighted degree `d`.
    ///
    /// When `d` is `None` it is inferred from an arbitrary vertex; a
    /// hypergraph without vertices is vacuously regular.
    pub fn regular(&self, d: Option<f64>) -> bool {
        let d = match d {
            Some(d) => d,
            None => match self.vertices.iter().next() {
                Some(vertex) => self.degree(vertex, true),
                None => return true,
            },
        };
        self.vertices.iter().all(|vertex| self.degree(vertex, true) == d)
    }

    /// Returns the set of edges containing both `u` and `v`; empty if `u == v`.
    pub fn adjacent(&self, u: &V, v: &V) -> BTreeSet<Edge<V>> {
        if u == v {
            return BTreeSet::new();
        }
        self.edges
            .keys()
            .filter(|edge| edge.contains(u) && edge.contains(v))
            .cloned()
            .collect()
    }

    /// Returns the set of edges incident on a vertex.
    ///
    /// Undirected: every edge containing the vertex (`forward` has no
    /// effect). Directed, forward: edges whose head is the vertex. Directed,
    /// backward: edges containing the vertex as a tail member.
    pub fn incident(&self, vertex: &V, forward: bool) -> BTreeSet<Edge<V>> {
        if forward && self.directed {
            self.edges
                .keys()
                .filter(|edge| edge.head() == Some(vertex))
                .cloned()
                .collect()
        } else {
            self.edges
                .keys()
                .filter(|edge| edge.contains(vertex) && edge.head() != Some(vertex))
                .cloned()
                .collect()
        }
    }

    /// Returns the set of edges over which `head` can be reached from `tail`.
    ///
    /// Directed: edges containing both where `head` is the edge's head.
    /// Undirected: the same as [`adjacent`](Self::adjacent).
    pub fn reachable(&self, tail: &V, head: &V) -> BTreeSet<Edge<V>> {
        let adjacent = self.adjacent(tail, head);
        if self.directed {
            adjacent
                .into_iter()
                .filter(|edge| edge.head() == Some(head))
                .collect()
        } else {
            adjacent
        }
    }

    /// Returns the set of vertices reachable from the given vertex over a
    /// single edge.
    pub fn neighbors(&self, vertex: &V) -> BTreeSet<V> {
        self.vertices
            .iter()
            .filter(|other| !self.reachable(vertex, other).is_empty())
            .cloned()
            .collect()
    }

    /// Returns the degree of a vertex: the sum of weights (or the count, when
    /// `weighted` is false) of the edges containing it.
    pub fn degree(&self, vertex: &V, weighted: bool) -> f64 {
        self.edges
            .iter()
            .filter(|(edge, _)| edge.contains(vertex))
            .map(|(_, weight)| if weighted { *weight } else { 1.0 })
            .sum()
    }

    /// Returns the indegree of a vertex: the sum over edges whose head it is.
    ///
    /// Equals [`degree`](Self::degree) for undirected hypergraphs.
    pub fn indegree(&self, vertex: &V, weighted: bool) -> f64 {
        if !self.directed {
            return self.degree(vertex, weighted);
        }
        self.edges
            .iter()
            .filter(|(edge, _)| edge.head() == Some(vertex))
            .map(|(_, weight)| if weighted { *weight } else { 1.0 })
            .sum()
    }

    /// Returns the outdegree of a vertex: the sum over edges containing it as
    /// a tail member.
    ///
    /// Equals [`degree`](Self::degree) for undirected hypergraphs.
    pub fn outdegree(&self, vertex: &V, weighted: bool) -> f64 {
        if !self.directed {
            return self.degree(vertex, weighted);
        }
        self.edges
            .iter()
            .filter(|(edge, _)| edge.contains(vertex) && edge.head() != Some(vertex))
            .map(|(_, weight)| if weighted { *weight } else { 1.0 })
            .sum()
    }

    fn check_directedness(&self, edge: &Edge<V>) -> Result<(), HygError> {
        if edge.is_directed() != self.directed {
            return Err(HygError::Graph(
                ErrorInfo::new(
                    "directedness-mismatch",
                    "edge directedness disagrees with the hypergraph",
                )
                .with_context("edge", format!("{:?}", edge.vertices()))
                .with_context("directed", self.directed.to_string()),
            ));
        }
        Ok(())
    }
}
