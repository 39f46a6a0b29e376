#![deny(missing_docs)]

//! Core contracts for the hyg hypergraph library: the vertex capability
//! bound, structured error types, and the deterministic RNG handle shared by
//! every downstream crate.

use std::fmt::Debug;
use std::hash::Hash;

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, HygError};
pub use rng::{derive_substream_seed, RngHandle};

/// Capability bound required of vertex values stored in a hypergraph.
///
/// Vertices are opaque caller-supplied values. Equality and hashing give them
/// a stable identity; the total order fixes iteration, matrix, and tie-break
/// ordering so every algorithm in the library is reproducible.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Ord + Hash + Debug {}
