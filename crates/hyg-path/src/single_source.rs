use std::collections::{BTreeMap, BTreeSet};

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;
use hyg_graph::Graph;

/// Predecessor map produced by single-source shortest path algorithms.
///
/// The start vertex maps to `None`; every other discovered vertex maps to
/// its predecessor on a shortest path. Vertices never reached have no entry.
pub type Predecessors<V> = BTreeMap<V, Option<V>>;

/// Dijkstra's algorithm from a start vertex.
///
/// Requires nonnegative edge weights (`negative-weight` error otherwise,
/// checked before any computation). Vertices are extracted in tentative
/// distance order with ties broken towards the lowest-ordered vertex, and
/// parallel edges relax with their minimum weight.
pub fn dijkstra<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Predecessors<V>, HygError> {
    check_vertex(graph, start)?;
    for (_, weight) in graph.weighted_edges() {
        if weight < 0.0 {
            return Err(HygError::Path(ErrorInfo::new(
                "negative-weight",
                "dijkstra requires nonnegative edge weights",
            )));
        }
    }
    let mut distances: BTreeMap<V, f64> = graph
        .vertices()
        .iter()
        .map(|vertex| (vertex.clone(), f64::INFINITY))
        .collect();
    distances.insert(start.clone(), 0.0);
    let mut predecessors: Predecessors<V> = BTreeMap::new();
    predecessors.insert(start.clone(), None);
    let mut unvisited: BTreeSet<V> = graph.vertices().clone();
    while let Some(current) = extract_minimum(&unvisited, &distances) {
        unvisited.remove(&current);
        let base = distances.get(&current).copied().unwrap_or(f64::INFINITY);
        for neighbor in graph.neighbors(&current) {
            if !unvisited.contains(&neighbor) {
                continue;
            }
            let Some(weight) = minimum_edge_weight(graph, &current, &neighbor) else {
                continue;
            };
            let candidate = base + weight;
            if candidate < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor, Some(current.clone()));
            }
        }
    }
    Ok(predecessors)
}

/// Bellman-Ford from a start vertex on a directed graph.
///
/// Runs |V|-1 relaxation rounds over all edges, then one verification pass;
/// a still-relaxable edge means a negative-weight cycle and fails fatally
/// with `negative-cycle`. Fails with `undirected-input` for undirected
/// graphs.
pub fn bellman_ford<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Predecessors<V>, HygError> {
    if !graph.directed() {
        return Err(HygError::Path(ErrorInfo::new(
            "undirected-input",
            "bellman-ford requires a directed graph",
        )));
    }
    check_vertex(graph, start)?;
    let mut arcs: Vec<(V, V, f64)> = Vec::new();
    for (edge, weight) in graph.weighted_edges() {
        let Some(head) = edge.head() else {
            continue;
        };
        let Some(tail) = edge.iter().find(|vertex| *vertex != head) else {
            continue;
        };
        arcs.push((tail.clone(), head.clone(), weight));
    }
    let mut distances: BTreeMap<V, f64> = graph
        .vertices()
        .iter()
        .map(|vertex| (vertex.clone(), f64::INFINITY))
        .collect();
    distances.insert(start.clone(), 0.0);
    let mut predecessors: Predecessors<V> = BTreeMap::new();
    predecessors.insert(start.clone(), None);
    let rounds = graph.vertex_count().saturating_sub(1);
    for _ in 0..rounds {
        for (tail, head, weight) in &arcs {
            let base = distances.get(tail).copied().unwrap_or(f64::INFINITY);
            let candidate = base + weight;
            if candidate < distances.get(head).copied().unwrap_or(f64::INFINITY) {
                distances.insert(head.clone(), candidate);
                predecessors.insert(head.clone(), Some(tail.clone()));
            }
        }
    }
    for (tail, head, weight) in &arcs {
        let base = distances.get(tail).copied().unwrap_or(f64::INFINITY);
        if base + weight < distances.get(head).copied().unwrap_or(f64::INFINITY) {
            return Err(HygError::Path(ErrorInfo::new(
                "negative-cycle",
                "graph contains a negative-weight cycle",
            )));
        }
    }
    Ok(predecessors)
}

/// Finds a shortest path between two vertices, returning the vertex path and
/// its total distance.
///
/// Attempts Dijkstra; exactly when Dijkstra fails its nonnegative-weights
/// precondition, falls back to Bellman-Ford. Fails with `no-path` when the
/// end vertex was never reached.
pub fn shortest_path<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    end: &V,
) -> Result<(Vec<V>, f64), HygError> {
    check_vertex(graph, end)?;
    let predecessors = match dijkstra(graph, start) {
        Ok(predecessors) => predecessors,
        Err(HygError::Path(info)) if info.code == "negative-weight" => bellman_ford(graph, start)?,
        Err(error) => return Err(error),
    };
    reconstruct(graph, &predecessors, start, end)
}

fn reconstruct<V: Vertex>(
    graph: &Graph<V>,
    predecessors: &Predecessors<V>,
    start: &V,
    end: &V,
) -> Result<(Vec<V>, f64), HygError> {
    let mut path = vec![end.clone()];
    let mut current = end.clone();
    while &current != start {
        match predecessors.get(&current) {
            Some(Some(previous)) => {
                path.push(previous.clone());
                current = previous.clone();
            }
            _ => {
                return Err(HygError::Path(
                    ErrorInfo::new("no-path", "no path exists between the vertices")
                        .with_context("start", format!("{start:?}"))
                        .with_context("end", format!("{end:?}")),
                ));
            }
        }
    }
    path.reverse();
    let mut distance = 0.0;
    for pair in path.windows(2) {
        if let Some(weight) = minimum_edge_weight(graph, &pair[0], &pair[1]) {
            distance += weight;
        }
    }
    Ok((path, distance))
}

fn extract_minimum<V: Vertex>(
    unvisited: &BTreeSet<V>,
    distances: &BTreeMap<V, f64>,
) -> Option<V> {
    let mut best: Option<(f64, &V)> = None;
    for vertex in unvisited {
        let distance = distances.get(vertex).copied().unwrap_or(f64::INFINITY);
        if distance.is_infinite() {
            continue;
        }
        let better = match &best {
            None => true,
            Some((current, _)) => distance < *current,
        };
        if better {
            best = Some((distance, vertex));
        }
    }
    best.map(|(_, vertex)| vertex.clone())
}

pub(crate) fn minimum_edge_weight<V: Vertex>(graph: &Graph<V>, tail: &V, head: &V) -> Option<f64> {
    graph
        .reachable(tail, head)
        .iter()
        .filter_map(|edge| graph.weight(edge))
        .reduce(f64::min)
}

fn check_vertex<V: Vertex>(graph: &Graph<V>, vertex: &V) -> Result<(), HygError> {
    if !graph.contains_vertex(vertex) {
        return Err(HygError::Path(
            ErrorInfo::new("unknown-vertex", "vertex does not exist")
                .with_context("vertex", format!("{vertex:?}")),
        ));
    }
    Ok(())
}
