use std::collections::BTreeSet;

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;

use crate::edge::Edge;
use crate::hypergraph::Hypergraph;

/// A graph: a [`Hypergraph`] specialized to exactly-2-vertex edges.
///
/// The arity invariant is enforced at construction and on every subsequent
/// `add_edge`; read-only queries delegate to the wrapped hypergraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V: Vertex> {
    inner: Hypergraph<V>,
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            inner: Hypergraph::new(directed),
        }
    }

    /// Builds a graph from initial vertex and weighted edge collections.
    ///
    /// Every edge is checked for arity 2 and directedness before any state is
    /// committed.
    pub fn from_parts(
        directed: bool,
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (Edge<V>, f64)>,
    ) -> Result<Self, HygError> {
        let staged: Vec<(Edge<V>, f64)> = edges.into_iter().collect();
        for (edge, _) in &staged {
            check_arity(edge)?;
        }
        Ok(Self {
            inner: Hypergraph::from_parts(directed, vertices, staged)?,
        })
    }

    /// Builds a graph from edges alone with default weights.
    pub fn from_edges(
        directed: bool,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Result<Self, HygError> {
        Self::from_parts(
            directed,
            std::iter::empty(),
            edges
                .into_iter()
                .map(|edge| (edge, crate::hypergraph::DEFAULT_WEIGHT)),
        )
    }

    /// Returns the underlying hypergraph view.
    pub fn as_hypergraph(&self) -> &Hypergraph<V> {
        &self.inner
    }

    /// Consumes the graph, returning the underlying hypergraph.
    pub fn into_hypergraph(self) -> Hypergraph<V> {
        self.inner
    }

    /// Adds a vertex. Inserting an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.inner.add_vertex(vertex);
    }

    /// Removes a vertex and every incident edge (with its weight).
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), HygError> {
        self.inner.remove_vertex(vertex)
    }

    /// Adds an edge with the given weight after checking its arity.
    pub fn add_edge(&mut self, edge: Edge<V>, weight: f64) -> Result<(), HygError> {
        check_arity(&edge)?;
        self.inner.add_edge(edge, weight)
    }

    /// Removes an edge and its weight entry, returning the detached weight.
    pub fn remove_edge(&mut self, edge: &Edge<V>) -> Result<f64, HygError> {
        self.inner.remove_edge(edge)
    }

    /// Returns the directedness of the graph.
    pub fn directed(&self) -> bool {
        self.inner.directed()
    }

    /// Returns the vertex set.
    pub fn vertices(&self) -> &BTreeSet<V> {
        self.inner.vertices()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Iterates over the edges in their total order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.inner.edges()
    }

    /// Iterates over the edges together with their weights.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&Edge<V>, f64)> + '_ {
        self.inner.weighted_edges()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns the weight of an edge, or `None` if the edge is absent.
    pub fn weight(&self, edge: &Edge<V>) -> Option<f64> {
        self.inner.weight(edge)
    }

    /// Returns whether the graph contains the given vertex.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.inner.contains_vertex(vertex)
    }

    /// Returns whether the graph contains the given edge.
    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.inner.contains_edge(edge)
    }

    /// Returns whether every edge has exactly `k` vertices. Always true for
    /// `k = 2` (or `k` omitted) by the graph invariant.
    pub fn uniform(&self, k: Option<usize>) -> bool {
        match k {
            None => true,
            Some(k) => k == 2,
        }
    }

    /// Returns whether every vertex has weighted degree `d`.
    pub fn regular(&self, d: Option<f64>) -> bool {
        self.inner.regular(d)
    }

    /// Returns the set of edges containing both `u` and `v`.
    pub fn adjacent(&self, u: &V, v: &V) -> BTreeSet<Edge<V>> {
        self.inner.adjacent(u, v)
    }

    /// Returns the set of edges incident on a vertex.
    pub fn incident(&self, vertex: &V, forward: bool) -> BTreeSet<Edge<V>> {
        self.inner.incident(vertex, forward)
    }

    /// Returns the set of edges over which `head` can be reached from `tail`.
    pub fn reachable(&self, tail: &V, head: &V) -> BTreeSet<Edge<V>> {
        self.inner.reachable(tail, head)
    }

    /// Returns the set of vertices reachable from the given vertex over a
    /// single edge.
    pub fn neighbors(&self, vertex: &V) -> BTreeSet<V> {
        self.inner.neighbors(vertex)
    }

    /// Returns the (weighted) degree of a vertex.
    pub fn degree(&self, vertex: &V, weighted: bool) -> f64 {
        self.inner.degree(vertex, weighted)
    }

    /// Returns the (weighted) indegree of a vertex.
    pub fn indegree(&self, vertex: &V, weighted: bool) -> f64 {
        self.inner.indegree(vertex, weighted)
    }

    /// Returns the (weighted) outdegree of a vertex.
    pub fn outdegree(&self, vertex: &V, weighted: bool) -> f64 {
        self.inner.outdegree(vertex, weighted)
    }
}

fn check_arity<V: Vertex>(edge: &Edge<V>) -> Result<(), HygError> {
    if edge.arity() != 2 {
        return Err(HygError::Graph(
            ErrorInfo::new("wrong-arity", "graph edges must have exactly two vertices")
                .with_context("arity", edge.arity().to_string()),
        ));
    }
    Ok(())
}
