#![deny(missing_docs)]

//! Algebraic and spectral analysis over hypergraph snapshots: degree,
//! adjacency, incidence, and Laplacian matrices, eigenvalue-based
//! connectivity, edge cuts, and the isoperimetric number.
//!
//! All matrices are built over the vertex and edge total orders, so results
//! are reproducible for a given hypergraph.

/// Connectivity properties: algebraic connectivity, edge cuts, and the
/// isoperimetric number.
pub mod connectivity;
/// Matrix constructions and Laplacian eigenvalues.
pub mod matrix;

use hyg_core::errors::HygError;
use hyg_core::Vertex;
use hyg_graph::Hypergraph;
use serde::{Deserialize, Serialize};

pub use connectivity::{connected, edge_cut, isoperimetric_number, CONNECTIVITY_TOLERANCE};
pub use matrix::{
    adjacency_matrix, degree_matrix, incidence_matrix, laplacian_eigenvalues, laplacian_matrix,
};

/// Spectral invariants of an undirected 2-uniform hypergraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpectralReport {
    /// Laplacian eigenvalues, sorted ascending.
    pub eigenvalues: Vec<f64>,
    /// Second smallest Laplacian eigenvalue, when the hypergraph has at
    /// least two vertices.
    pub algebraic_connectivity: Option<f64>,
    /// Whether the hypergraph is connected under the algebraic test.
    pub connected: bool,
}

/// Computes the spectral report for an undirected 2-uniform hypergraph.
pub fn spectral_report<V: Vertex>(hypergraph: &Hypergraph<V>) -> Result<SpectralReport, HygError> {
    let is_connected = connected(hypergraph)?;
    let laplacian = laplacian_matrix(hypergraph)?;
    let eigenvalues = laplacian_eigenvalues(&laplacian);
    let algebraic_connectivity = eigenvalues.get(1).copied();
    Ok(SpectralReport {
        eigenvalues,
        algebraic_connectivity,
        connected: is_connected,
    })
}
