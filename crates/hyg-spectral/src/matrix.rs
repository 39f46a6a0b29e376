use hyg_core::errors::{ErrorInfo, HygError};
use hyg_core::Vertex;
use hyg_graph::{Edge, Hypergraph};
use nalgebra::{DMatrix, SymmetricEigen};

/// Returns the diagonal degree matrix of a hypergraph.
///
/// Entries are weighted indegrees for directed hypergraphs and weighted
/// degrees otherwise. Rows follow the vertex total order, so the result is
/// reproducible.
pub fn degree_matrix<V: Vertex>(hypergraph: &Hypergraph<V>) -> DMatrix<f64> {
    let vertices = sorted_vertices(hypergraph);
    let mut matrix = DMatrix::<f64>::zeros(vertices.len(), vertices.len());
    for (index, vertex) in vertices.iter().enumerate() {
        matrix[(index, index)] = hypergraph.indegree(vertex, true);
    }
    matrix
}

/// Returns the weighted adjacency matrix of a 2-uniform hypergraph.
///
/// `entry[u][v]` is the total weight of edges over which `v` is reachable
/// from `u`, respecting direction. Fails with `not-2-uniform` for other
/// hypergraphs.
pub fn adjacency_matrix<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<DMatrix<f64>, HygError> {
    ensure_two_uniform(hypergraph)?;
    let vertices = sorted_vertices(hypergraph);
    let mut matrix = DMatrix::<f64>::zeros(vertices.len(), vertices.len());
    for (row, u) in vertices.iter().enumerate() {
        for (column, v) in vertices.iter().enumerate() {
            matrix[(row, column)] = hypergraph
                .reachable(u, v)
                .iter()
                .filter_map(|edge| hypergraph.weight(edge))
                .sum();
        }
    }
    Ok(matrix)
}

/// Returns the incidence matrix of a hypergraph.
///
/// Rows are vertices and columns are edges, both in their total order.
/// Undirected: 1 where the vertex belongs to the edge. Directed: +1 at the
/// head row and -1 at each tail row.
pub fn incidence_matrix<V: Vertex>(hypergraph: &Hypergraph<V>) -> DMatrix<f64> {
    let vertices = sorted_vertices(hypergraph);
    let edges: Vec<Edge<V>> = hypergraph.edges().cloned().collect();
    let row_of = |vertex: &V| vertices.iter().position(|v| v == vertex);
    let mut matrix = DMatrix::<f64>::zeros(vertices.len(), edges.len());
    for (column, edge) in edges.iter().enumerate() {
        if let Some(head) = edge.head() {
            if let Some(row) = row_of(head) {
                matrix[(row, column)] = 1.0;
            }
            for vertex in edge.tail() {
                if let Some(row) = row_of(&vertex) {
                    matrix[(row, column)] = -1.0;
                }
            }
        } else {
            for vertex in edge.iter() {
                if let Some(row) = row_of(vertex) {
                    matrix[(row, column)] = 1.0;
                }
            }
        }
    }
    matrix
}

/// Returns the Laplacian matrix of a 2-uniform hypergraph: the degree matrix
/// minus the adjacency matrix.
///
/// Only the 2-uniform Laplacian is supported; the generalized row-sum
/// hypergraph Laplacian is deliberately not provided.
pub fn laplacian_matrix<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<DMatrix<f64>, HygError> {
    let adjacency = adjacency_matrix(hypergraph)?;
    Ok(degree_matrix(hypergraph) - adjacency)
}

/// Returns the real eigenvalues of a symmetric Laplacian, sorted ascending.
pub fn laplacian_eigenvalues(laplacian: &DMatrix<f64>) -> Vec<f64> {
    if laplacian.nrows() == 0 {
        return Vec::new();
    }
    let eigen = SymmetricEigen::new(laplacian.clone());
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    eigenvalues
}

pub(crate) fn sorted_vertices<V: Vertex>(hypergraph: &Hypergraph<V>) -> Vec<V> {
    hypergraph.vertices().iter().cloned().collect()
}

fn ensure_two_uniform<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<(), HygError> {
    if !hypergraph.uniform(Some(2)) {
        return Err(HygError::Spectral(ErrorInfo::new(
            "not-2-uniform",
            "matrix requires a 2-uniform hypergraph",
        )));
    }
    Ok(())
}
