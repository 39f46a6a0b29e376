use hyg_graph::{Edge, Graph};
use hyg_path::{floyd_warshall, shortest_path_subgraph};

fn undirected_weighted() -> Graph<i32> {
    Graph::from_parts(
        false,
        1..=5,
        [
            (Edge::undirected([1, 2]).unwrap(), 1.25),
            (Edge::undirected([2, 3]).unwrap(), 1.0),
            (Edge::undirected([3, 4]).unwrap(), 1.11),
            (Edge::undirected([4, 5]).unwrap(), 1.43),
            (Edge::undirected([3, 5]).unwrap(), 10.0),
            (Edge::undirected([5, 2]).unwrap(), 2.0),
            (Edge::undirected([1, 5]).unwrap(), 100.0),
        ],
    )
    .unwrap()
}

#[test]
fn floyd_warshall_matches_known_distances() {
    let distances = floyd_warshall(&undirected_weighted());
    assert_eq!(distances[&1][&1], 0.0);
    assert!((distances[&1][&5] - 3.25).abs() < 1e-9);
    assert!((distances[&3][&5] - 2.54).abs() < 1e-9);
}

#[test]
fn floyd_warshall_respects_direction() {
    let graph = Graph::from_parts(
        true,
        [1, 2, 3],
        [
            (Edge::directed([1, 2], 2).unwrap(), 1.0),
            (Edge::directed([2, 3], 3).unwrap(), 1.0),
        ],
    )
    .unwrap();
    let distances = floyd_warshall(&graph);
    assert_eq!(distances[&1][&3], 2.0);
    assert!(distances[&3][&1].is_infinite());
}

#[test]
fn pruning_keeps_only_tight_edges() {
    let graph = undirected_weighted();
    let pruned = shortest_path_subgraph(&graph).unwrap();

    assert_eq!(pruned.vertices(), graph.vertices());
    assert_eq!(pruned.edge_count(), 5);
    assert!(!pruned.contains_edge(&Edge::undirected([3, 5]).unwrap()));
    assert!(!pruned.contains_edge(&Edge::undirected([1, 5]).unwrap()));
    assert!(pruned.contains_edge(&Edge::undirected([5, 2]).unwrap()));
    for edge in pruned.edges() {
        assert!(graph.contains_edge(edge));
    }
    // the input graph is untouched
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn pruning_never_changes_all_pairs_distances() {
    let graph = undirected_weighted();
    let pruned = shortest_path_subgraph(&graph).unwrap();
    let before = floyd_warshall(&graph);
    let after = floyd_warshall(&pruned);
    for (source, row) in &before {
        for (destination, distance) in row {
            let pruned_distance = after[source][destination];
            if distance.is_infinite() {
                assert!(pruned_distance.is_infinite());
            } else {
                assert!((distance - pruned_distance).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn directed_pruning_measures_tail_to_head() {
    let graph = Graph::from_parts(
        true,
        [1, 2, 3],
        [
            (Edge::directed([1, 2], 2).unwrap(), 1.0),
            (Edge::directed([2, 3], 3).unwrap(), 1.0),
            (Edge::directed([1, 3], 3).unwrap(), 5.0),
        ],
    )
    .unwrap();
    let pruned = shortest_path_subgraph(&graph).unwrap();
    assert_eq!(pruned.edge_count(), 2);
    assert!(!pruned.contains_edge(&Edge::directed([1, 3], 3).unwrap()));
}
