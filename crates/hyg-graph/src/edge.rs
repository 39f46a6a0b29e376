use std::collections::BTreeSet;

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;

/// An immutable labeled set of at least one vertex, optionally carrying a
/// designated head vertex for directed use.
///
/// Two edges are equal iff their vertex sets are equal and their heads are
/// equal (including both absent): the same vertex set with and without a head
/// are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V: Vertex> {
    vertices: BTreeSet<V>,
    head: Option<V>,
}

impl<V: Vertex> Edge<V> {
    /// Creates an undirected edge from at least one distinct vertex.
    pub fn undirected(vertices: impl IntoIterator<Item = V>) -> Result<Self, HygError> {
        let vertices: BTreeSet<V> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(edge_error(
                "empty-edge",
                "an edge must contain at least one vertex",
            ));
        }
        Ok(Self {
            vertices,
            head: None,
        })
    }

    /// Creates a directed edge whose head must be one of its vertices.
    pub fn directed(vertices: impl IntoIterator<Item = V>, head: V) -> Result<Self, HygError> {
        let edge = Self::undirected(vertices)?;
        edge.with_head(head)
    }

    /// Returns a copy of this edge re-oriented towards the given head.
    ///
    /// The vertex set is unchanged; the head must be a member.
    pub fn with_head(&self, head: V) -> Result<Self, HygError> {
        if !self.vertices.contains(&head) {
            return Err(HygError::Graph(
                ErrorInfo::new("head-not-member", "edge does not contain the head vertex")
                    .with_context("head", format!("{head:?}")),
            ));
        }
        Ok(Self {
            vertices: self.vertices.clone(),
            head: Some(head),
        })
    }

    /// Returns the head vertex, if one is designated.
    pub fn head(&self) -> Option<&V> {
        self.head.as_ref()
    }

    /// Returns the tail set: all vertices minus the head.
    ///
    /// Equals the full vertex set when no head is designated.
    pub fn tail(&self) -> BTreeSet<V> {
        match &self.head {
            Some(head) => self
                .vertices
                .iter()
                .filter(|v| *v != head)
                .cloned()
                .collect(),
            None => self.vertices.clone(),
        }
    }

    /// Returns the vertex set of the edge.
    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// Returns the number of vertices in the edge.
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the edge contains the given vertex.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns whether the edge carries a head vertex.
    pub fn is_directed(&self) -> bool {
        self.head.is_some()
    }

    /// Iterates over the vertices of the edge in their total order.
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, V> {
        self.vertices.iter()
    }
}

fn edge_error(code: &str, message: &str) -> HygError {
    HygError::Graph(ErrorInfo::new(code, message))
}
