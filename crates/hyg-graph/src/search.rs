use std::collections::{BTreeSet, VecDeque};

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;

use crate::hypergraph::Hypergraph;

/// Lazy breadth-first traversal over a hypergraph's incidence structure.
///
/// Yields the start vertex first, then every reachable vertex exactly once in
/// discovery order. Directed hypergraphs only follow edges outward: the
/// frontier vertex must be a tail member and the destination is the head.
/// The iterator is one-shot; stopping early has no side effects.
#[derive(Debug)]
pub struct BreadthFirstSearch<'g, V: Vertex> {
    graph: &'g Hypergraph<V>,
    frontier: VecDeque<V>,
    visited: BTreeSet<V>,
}

impl<V: Vertex> Iterator for BreadthFirstSearch<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let vertex = self.frontier.pop_front()?;
        for next in successors(self.graph, &vertex) {
            if self.visited.insert(next.clone()) {
                self.frontier.push_back(next);
            }
        }
        Some(vertex)
    }
}

/// Starts a breadth-first traversal from the given vertex.
///
/// Fails with `unknown-vertex` when the start vertex is absent.
pub fn breadth_first_search<'g, V: Vertex>(
    graph: &'g Hypergraph<V>,
    start: &V,
) -> Result<BreadthFirstSearch<'g, V>, HygError> {
    check_start(graph, start)?;
    let mut visited = BTreeSet::new();
    visited.insert(start.clone());
    let mut frontier = VecDeque::new();
    frontier.push_back(start.clone());
    Ok(BreadthFirstSearch {
        graph,
        frontier,
        visited,
    })
}

/// Lazy depth-first traversal with the same visitation semantics as
/// [`BreadthFirstSearch`] but depth-first order.
///
/// Implemented with an explicit stack, so traversal depth is not bounded by
/// the call stack.
#[derive(Debug)]
pub struct DepthFirstSearch<'g, V: Vertex> {
    graph: &'g Hypergraph<V>,
    stack: Vec<V>,
    visited: BTreeSet<V>,
}

impl<V: Vertex> Iterator for DepthFirstSearch<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(vertex) = self.stack.pop() {
            if !self.visited.insert(vertex.clone()) {
                continue;
            }
            let mut next: Vec<V> = successors(self.graph, &vertex)
                .into_iter()
                .filter(|w| !self.visited.contains(w))
                .collect();
            // reversed so the lowest-ordered successor is explored first
            next.reverse();
            self.stack.extend(next);
            return Some(vertex);
        }
        None
    }
}

/// Starts a depth-first traversal from the given vertex.
///
/// Fails with `unknown-vertex` when the start vertex is absent.
pub fn depth_first_search<'g, V: Vertex>(
    graph: &'g Hypergraph<V>,
    start: &V,
) -> Result<DepthFirstSearch<'g, V>, HygError> {
    check_start(graph, start)?;
    Ok(DepthFirstSearch {
        graph,
        stack: vec![start.clone()],
        visited: BTreeSet::new(),
    })
}

fn check_start<V: Vertex>(graph: &Hypergraph<V>, start: &V) -> Result<(), HygError> {
    if !graph.contains_vertex(start) {
        return Err(HygError::Graph(
            ErrorInfo::new("unknown-vertex", "start vertex does not exist")
                .with_context("vertex", format!("{start:?}")),
        ));
    }
    Ok(())
}

fn successors<V: Vertex>(graph: &Hypergraph<V>, vertex: &V) -> BTreeSet<V> {
    let mut next = BTreeSet::new();
    if graph.directed() {
        for edge in graph.incident(vertex, false) {
            if let Some(head) = edge.head() {
                next.insert(head.clone());
            }
        }
    } else {
        for edge in graph.incident(vertex, true) {
            for member in edge.iter() {
                if member != vertex {
                    next.insert(member.clone());
                }
            }
        }
    }
    next
}
