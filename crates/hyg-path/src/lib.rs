#![deny(missing_docs)]

//! Weighted shortest path algorithms over 2-uniform graphs: Dijkstra,
//! Bellman-Ford, combined path reconstruction, Floyd-Warshall, and
//! shortest-path-subgraph extraction.
//!
//! Every function takes a [`hyg_graph::Graph`], so 2-uniformity holds by
//! construction; remaining preconditions (weight signs, directedness) are
//! checked fail-fast before any computation.

mod all_pairs;
mod single_source;

pub use all_pairs::{floyd_warshall, shortest_path_subgraph, DistanceMatrix};
pub use single_source::{bellman_ford, dijkstra, shortest_path, Predecessors};
