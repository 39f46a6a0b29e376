use std::collections::BTreeMap;

use hyg_core::errors::HygError;
use hyg_core::Vertex;
use hyg_graph::{Edge, Graph};

use crate::single_source::minimum_edge_weight;

/// Maximum difference under which an edge weight counts as equal to the
/// shortest distance between its endpoints.
const TIGHTNESS_TOLERANCE: f64 = 1e-9;

/// All-pairs shortest distances keyed by source then destination vertex.
pub type DistanceMatrix<V> = BTreeMap<V, BTreeMap<V, f64>>;

/// Floyd-Warshall all-pairs shortest distances.
///
/// Initial distances are 0 on the diagonal, the minimum direct edge weight
/// (respecting direction) where one exists, and infinity otherwise; then the
/// standard dynamic program over intermediate vertices.
pub fn floyd_warshall<V: Vertex>(graph: &Graph<V>) -> DistanceMatrix<V> {
    let vertices: Vec<V> = graph.vertices().iter().cloned().collect();
    let mut distances: DistanceMatrix<V> = BTreeMap::new();
    for u in &vertices {
        let mut row = BTreeMap::new();
        for v in &vertices {
            let distance = if u == v {
                0.0
            } else {
                minimum_edge_weight(graph, u, v).unwrap_or(f64::INFINITY)
            };
            row.insert(v.clone(), distance);
        }
        distances.insert(u.clone(), row);
    }
    for via in &vertices {
        for u in &vertices {
            for v in &vertices {
                let direct = entry(&distances, u, v);
                let detour = entry(&distances, u, via) + entry(&distances, via, v);
                if detour < direct {
                    if let Some(row) = distances.get_mut(u) {
                        row.insert(v.clone(), detour);
                    }
                }
            }
        }
    }
    distances
}

/// Returns a copy of the graph retaining only tight edges: edges whose
/// weight equals the shortest distance between their endpoints. Pruning the
/// others never changes any all-pairs distance.
///
/// Operates on a private copy; the input graph is left untouched.
pub fn shortest_path_subgraph<V: Vertex>(graph: &Graph<V>) -> Result<Graph<V>, HygError> {
    let distances = floyd_warshall(graph);
    let mut pruned = graph.clone();
    let edges: Vec<(Edge<V>, f64)> = graph
        .weighted_edges()
        .map(|(edge, weight)| (edge.clone(), weight))
        .collect();
    for (edge, weight) in edges {
        let Some((tail, head)) = endpoints(&edge) else {
            continue;
        };
        let shortest = entry(&distances, &tail, &head);
        if (weight - shortest).abs() > TIGHTNESS_TOLERANCE {
            pruned.remove_edge(&edge)?;
        }
    }
    Ok(pruned)
}

fn endpoints<V: Vertex>(edge: &Edge<V>) -> Option<(V, V)> {
    match edge.head() {
        Some(head) => {
            let tail = edge.iter().find(|vertex| *vertex != head)?;
            Some((tail.clone(), head.clone()))
        }
        None => {
            let mut members = edge.iter();
            let first = members.next()?;
            let second = members.next()?;
            Some((first.clone(), second.clone()))
        }
    }
}

fn entry<V: Vertex>(distances: &DistanceMatrix<V>, u: &V, v: &V) -> f64 {
    distances
        .get(u)
        .and_then(|row| row.get(v))
        .copied()
        .unwrap_or(f64::INFINITY)
}
