use std::collections::{BTreeMap, BTreeSet, VecDeque};

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::rng::RngHandle;
use hyg_core::Vertex;
use rand::seq::SliceRandom;

use crate::edge::Edge;
use crate::hypergraph::Hypergraph;

/// Minimum improvement a local-search move must achieve to be accepted.
const ACCEPT_MARGIN: f64 = 1e-4;

/// Orients every edge of an undirected hypergraph towards a uniformly random
/// member vertex. Weights are copied unchanged.
pub fn random_orientation<V: Vertex>(
    hypergraph: &Hypergraph<V>,
    rng: &mut RngHandle,
) -> Result<Hypergraph<V>, HygError> {
    ensure_undirected(hypergraph)?;
    let mut oriented = oriented_shell(hypergraph);
    for (edge, weight) in hypergraph.weighted_edges() {
        let members: Vec<&V> = edge.iter().collect();
        let Some(head) = members.choose(rng) else {
            continue;
        };
        oriented.add_edge(edge.with_head((*head).clone())?, weight)?;
    }
    Ok(oriented)
}

/// Finds a minimum maximum indegree orientation of an unweighted hypergraph.
///
/// Starts from a deterministic orientation (each edge headed at its
/// lowest-ordered member) and repeatedly reverses a reducing path: a directed
/// path leading backward from a vertex of maximum indegree to a vertex whose
/// indegree is at least two lower. Terminates when no reducing path exists,
/// which is a local optimum for the maximum indegree. Ties for the maximum
/// vertex are broken towards the lowest-ordered vertex.
pub fn minimum_maximum_indegree_orientation<V: Vertex>(
    hypergraph: &Hypergraph<V>,
) -> Result<Hypergraph<V>, HygError> {
    ensure_undirected(hypergraph)?;
    let mut oriented = oriented_shell(hypergraph);
    for (edge, weight) in hypergraph.weighted_edges() {
        let Some(head) = edge.iter().next().cloned() else {
            continue;
        };
        oriented.add_edge(edge.with_head(head)?, weight)?;
    }
    loop {
        let degrees: BTreeMap<V, i64> = oriented
            .vertices()
            .iter()
            .map(|vertex| (vertex.clone(), oriented.indegree(vertex, false) as i64))
            .collect();
        let Some(vmax) = max_indegree_vertex(&degrees) else {
            break;
        };
        let Some(path) = find_reducing_path(&oriented, &degrees, &vmax) else {
            break;
        };
        for (edge, vertex) in path {
            let weight = oriented.remove_edge(&edge)?;
            oriented.add_edge(edge.with_head(vertex)?, weight)?;
        }
    }
    Ok(oriented)
}

/// Approximates a minimum maximum weighted indegree orientation with a local
/// search heuristic; no optimality guarantee.
///
/// Seeds greedily (each edge headed at its least-loaded member), then
/// alternates two first-improvement passes until neither finds a move: a
/// reduce-max pass that reassigns edges away from the most loaded vertex, and
/// an interchange pass that swaps the heads of an edge pair between a heavier
/// and a lighter vertex. Moves must improve by at least 1e-4 to be accepted;
/// scans run in vertex and edge order, so the result is deterministic.
pub fn minimum_maximum_weighted_indegree_orientation<V: Vertex>(
    hypergraph: &Hypergraph<V>,
) -> Result<Hypergraph<V>, HygError> {
    ensure_undirected(hypergraph)?;
    let mut oriented = oriented_shell(hypergraph);
    for (edge, weight) in hypergraph.weighted_edges() {
        let Some(head) = least_loaded_member(&oriented, edge) else {
            continue;
        };
        oriented.add_edge(edge.with_head(head)?, weight)?;
    }
    loop {
        let mut accepted = false;
        while reduce_max_step(&mut oriented)? {
            accepted = true;
        }
        while interchange_step(&mut oriented)? {
            accepted = true;
        }
        if !accepted {
            break;
        }
    }
    Ok(oriented)
}

fn ensure_undirected<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<(), HygError> {
    if hypergraph.directed() {
        return Err(HygError::Orientation(ErrorInfo::new(
            "directed-input",
            "orientation requires an undirected hypergraph",
        )));
    }
    Ok(())
}

fn oriented_shell<V: Vertex>(hypergraph: &Hypergraph<V>) -> Hypergraph<V> {
    let mut oriented = Hypergraph::new(true);
    for vertex in hypergraph.vertices() {
        oriented.add_vertex(vertex.clone());
    }
    oriented
}

fn max_indegree_vertex<V: Vertex>(degrees: &BTreeMap<V, i64>) -> Option<V> {
    let mut best: Option<(&V, i64)> = None;
    for (vertex, degree) in degrees {
        match best {
            Some((_, current)) if *degree <= current => {}
            _ => best = Some((vertex, *degree)),
        }
    }
    best.map(|(vertex, _)| vertex.clone())
}

type ReducingPath<V> = Vec<(Edge<V>, V)>;

/// Breadth-first search backward along edge heads for a vertex whose
/// indegree is at least two below the starting vertex's.
fn find_reducing_path<V: Vertex>(
    oriented: &Hypergraph<V>,
    degrees: &BTreeMap<V, i64>,
    from: &V,
) -> Option<ReducingPath<V>> {
    let target = degrees.get(from).copied().unwrap_or(0);
    let mut marked = BTreeSet::new();
    marked.insert(from.clone());
    let mut queue: VecDeque<(V, ReducingPath<V>)> = VecDeque::new();
    queue.push_back((from.clone(), Vec::new()));
    while let Some((vertex, path)) = queue.pop_front() {
        for edge in oriented.incident(&vertex, true) {
            for next in edge.iter() {
                if marked.contains(next) {
                    continue;
                }
                let degree = degrees.get(next).copied().unwrap_or(0);
                if degree < target - 1 {
                    let mut found = path.clone();
                    found.push((edge.clone(), next.clone()));
                    return Some(found);
                } else if degree <= target {
                    marked.insert(next.clone());
                    let mut extended = path.clone();
                    extended.push((edge.clone(), next.clone()));
                    queue.push_back((next.clone(), extended));
                }
            }
        }
    }
    None
}

fn least_loaded_member<V: Vertex>(oriented: &Hypergraph<V>, edge: &Edge<V>) -> Option<V> {
    let mut best: Option<(f64, &V)> = None;
    for vertex in edge.iter() {
        let load = oriented.indegree(vertex, true);
        let better = match &best {
            None => true,
            Some((current, _)) => load < *current,
        };
        if better {
            best = Some((load, vertex));
        }
    }
    best.map(|(_, vertex)| vertex.clone())
}

fn most_loaded_vertex<V: Vertex>(oriented: &Hypergraph<V>) -> Option<V> {
    let mut best: Option<(f64, &V)> = None;
    for vertex in oriented.vertices() {
        let load = oriented.indegree(vertex, true);
        let better = match &best {
            None => true,
            Some((current, _)) => load >= *current,
        };
        if better {
            best = Some((load, vertex));
        }
    }
    best.map(|(_, vertex)| vertex.clone())
}

/// Tries to reassign one edge away from the most loaded vertex. The candidate
/// member must stay below the reduced load of the most loaded vertex by the
/// acceptance margin.
fn reduce_max_step<V: Vertex>(oriented: &mut Hypergraph<V>) -> Result<bool, HygError> {
    let Some(vmax) = most_loaded_vertex(oriented) else {
        return Ok(false);
    };
    let max_load = oriented.indegree(&vmax, true);
    let headed: Vec<(Edge<V>, f64)> = oriented
        .weighted_edges()
        .filter(|(edge, _)| edge.head() == Some(&vmax))
        .map(|(edge, weight)| (edge.clone(), weight))
        .collect();
    for (edge, weight) in headed {
        for candidate in edge.iter() {
            if candidate == &vmax {
                continue;
            }
            if oriented.indegree(candidate, true) + ACCEPT_MARGIN < max_load - weight {
                let candidate = candidate.clone();
                let weight = oriented.remove_edge(&edge)?;
                oriented.add_edge(edge.with_head(candidate)?, weight)?;
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Tries to swap the heads of one edge pair between a heavier and a lighter
/// vertex when doing so lowers the maximum of their loads.
fn interchange_step<V: Vertex>(oriented: &mut Hypergraph<V>) -> Result<bool, HygError> {
    let mut order: Vec<V> = oriented.vertices().iter().cloned().collect();
    order.sort_by(|a, b| {
        oriented
            .indegree(a, true)
            .partial_cmp(&oriented.indegree(b, true))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(b))
    });
    for (position, heavy) in order.iter().enumerate().rev() {
        for light in order.iter().take(position) {
            let heavy_load = oriented.indegree(heavy, true);
            let light_load = oriented.indegree(light, true);
            let heavy_edges: Vec<(Edge<V>, f64)> = oriented
                .weighted_edges()
                .filter(|(edge, _)| edge.head() == Some(heavy) && edge.contains(light))
                .map(|(edge, weight)| (edge.clone(), weight))
                .collect();
            if heavy_edges.is_empty() {
                continue;
            }
            let light_edges: Vec<(Edge<V>, f64)> = oriented
                .weighted_edges()
                .filter(|(edge, _)| edge.head() == Some(light) && edge.contains(heavy))
                .map(|(edge, weight)| (edge.clone(), weight))
                .collect();
            for (heavy_edge, heavy_weight) in &heavy_edges {
                for (light_edge, light_weight) in &light_edges {
                    let swapped = (heavy_load - heavy_weight + light_weight)
                        .max(light_load - light_weight + heavy_weight);
                    if swapped + ACCEPT_MARGIN < heavy_load.max(light_load) {
                        let heavy_weight = oriented.remove_edge(heavy_edge)?;
                        let light_weight = oriented.remove_edge(light_edge)?;
                        oriented.add_edge(heavy_edge.with_head(light.clone())?, heavy_weight)?;
                        oriented.add_edge(light_edge.with_head(heavy.clone())?, light_weight)?;
                        return Ok(true);
                    }
                }
            }
        }
    }
    Ok(false)
}
