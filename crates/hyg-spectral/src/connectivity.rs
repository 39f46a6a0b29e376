use std::collections::BTreeSet;

use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;
use hyg_graph::{Edge, Hypergraph};
use itertools::Itertools;

use crate::matrix::{laplacian_eigenvalues, laplacian_matrix};

/// An eigenvalue above this threshold counts as positive for the algebraic
/// connectivity test.
pub const CONNECTIVITY_TOLERANCE: f64 = 1e-8;

/// Returns whether an undirected hypergraph is connected, using the second
/// smallest eigenvalue of its Laplacian (algebraic connectivity).
///
/// Fails with `directed-input` for directed hypergraphs. Hypergraphs with
/// fewer than two vertices are trivially connected.
pub fn connected<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<bool, HygError> {
    if hypergraph.directed() {
        return Err(HygError::Spectral(ErrorInfo::new(
            "directed-input",
            "connectivity test applies to undirected hypergraphs",
        )));
    }
    if hypergraph.vertex_count() < 2 {
        return Ok(true);
    }
    let laplacian = laplacian_matrix(hypergraph)?;
    let eigenvalues = laplacian_eigenvalues(&laplacian);
    Ok(eigenvalues
        .get(1)
        .map(|value| *value > CONNECTIVITY_TOLERANCE)
        .unwrap_or(true))
}

/// Returns the edge cut (coboundary) of a vertex subset: all edges with at
/// least one vertex inside the subset and at least one outside.
///
/// Fails with `not-a-subset` unless the subset is contained in the vertex
/// set.
pub fn edge_cut<V: Vertex>(
    hypergraph: &Hypergraph<V>,
    subset: &BTreeSet<V>,
) -> Result<BTreeSet<Edge<V>>, HygError> {
    if !subset.is_subset(hypergraph.vertices()) {
        return Err(HygError::Spectral(ErrorInfo::new(
            "not-a-subset",
            "set is not a subset of the hypergraph vertices",
        )));
    }
    Ok(hypergraph
        .edges()
        .filter(|edge| {
            edge.iter().any(|vertex| subset.contains(vertex))
                && edge.iter().any(|vertex| !subset.contains(vertex))
        })
        .cloned()
        .collect())
}

/// Returns the isoperimetric number (Cheeger constant) of a hypergraph: the
/// minimum of |edge_cut(X)| / |X| over every nonempty subset X of at most
/// half the vertices.
///
/// Exhausts all subsets, so the cost is exponential in the vertex count.
/// This is a reference computation with no internal bound; limiting input
/// size is the caller's responsibility. Infinity for fewer than two
/// vertices.
pub fn isoperimetric_number<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<f64, HygError> {
    let vertices: Vec<V> = hypergraph.vertices().iter().cloned().collect();
    let mut minimum = f64::INFINITY;
    for size in 1..=vertices.len() / 2 {
        for subset in vertices.iter().cloned().combinations(size) {
            let subset: BTreeSet<V> = subset.into_iter().collect();
            let cut = edge_cut(hypergraph, &subset)?;
            let ratio = cut.len() as f64 / size as f64;
            if ratio < minimum {
                minimum = ratio;
            }
        }
    }
    Ok(minimum)
}
