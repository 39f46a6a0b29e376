use std::collections::BTreeSet;

use hyg_core::rng::RngHandle;
use hyg_graph::{minimum_maximum_indegree_orientation, Edge, Hypergraph};
use proptest::prelude::*;
use rand::Rng;

fn random_hypergraph(seed: u64, vertices: u32, edges: usize) -> Hypergraph<u32> {
    let mut rng = RngHandle::from_seed(seed);
    let mut hypergraph = Hypergraph::new(false);
    for vertex in 0..vertices {
        hypergraph.add_vertex(vertex);
    }
    for _ in 0..edges {
        let arity = rng.gen_range(2..=3);
        let mut members = Vec::new();
        for _ in 0..arity {
            members.push(rng.gen_range(0..vertices));
        }
        if members.iter().collect::<BTreeSet<_>>().len() < 2 {
            continue;
        }
        hypergraph
            .add_edge(Edge::undirected(members).unwrap(), 1.0)
            .unwrap();
    }
    hypergraph
}

proptest! {
    #[test]
    fn orientation_preserves_structure(seed in any::<u64>(), vertices in 4u32..9, edges in 1usize..8) {
        let hypergraph = random_hypergraph(seed, vertices, edges);
        let oriented = minimum_maximum_indegree_orientation(&hypergraph).unwrap();

        prop_assert!(oriented.directed());
        prop_assert_eq!(oriented.vertices(), hypergraph.vertices());
        prop_assert_eq!(oriented.edge_count(), hypergraph.edge_count());

        let mut vertex_sets: Vec<BTreeSet<u32>> = Vec::new();
        for edge in oriented.edges() {
            let head = edge.head().expect("every oriented edge carries a head");
            prop_assert!(edge.contains(head));
            vertex_sets.push(edge.vertices().clone());
        }
        let original_sets: Vec<BTreeSet<u32>> =
            hypergraph.edges().map(|edge| edge.vertices().clone()).collect();
        prop_assert_eq!(vertex_sets, original_sets);

        let total: f64 = oriented
            .vertices()
            .iter()
            .map(|vertex| oriented.indegree(vertex, false))
            .sum();
        prop_assert_eq!(total as usize, oriented.edge_count());

        for vertex in oriented.vertices() {
            prop_assert_eq!(
                oriented.indegree(vertex, false) + oriented.outdegree(vertex, false),
                oriented.degree(vertex, false)
            );
        }
    }
}
