use std::collections::BTreeSet;

use hyg_graph::{Edge, Hypergraph};
use hyg_spectral::{edge_cut, isoperimetric_number};

fn four_cycle() -> Hypergraph<i32> {
    Hypergraph::from_edges(
        false,
        [
            Edge::undirected([1, 2]).unwrap(),
            Edge::undirected([2, 3]).unwrap(),
            Edge::undirected([3, 4]).unwrap(),
            Edge::undirected([4, 1]).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn edge_cut_collects_boundary_edges() {
    let cycle = four_cycle();
    let subset: BTreeSet<i32> = [1, 2].into_iter().collect();
    let cut = edge_cut(&cycle, &subset).unwrap();
    assert_eq!(cut.len(), 2);
    assert!(cut.contains(&Edge::undirected([2, 3]).unwrap()));
    assert!(cut.contains(&Edge::undirected([4, 1]).unwrap()));
}

#[test]
fn edge_cut_covers_hyperedges() {
    let hypergraph =
        Hypergraph::from_edges(false, [Edge::undirected([1, 2, 3]).unwrap()]).unwrap();
    let subset: BTreeSet<i32> = [1].into_iter().collect();
    let cut = edge_cut(&hypergraph, &subset).unwrap();
    assert_eq!(cut.len(), 1);
}

#[test]
fn edge_cut_rejects_foreign_vertices() {
    let cycle = four_cycle();
    let subset: BTreeSet<i32> = [1, 9].into_iter().collect();
    assert_eq!(edge_cut(&cycle, &subset).unwrap_err().code(), "not-a-subset");
}

#[test]
fn isoperimetric_number_of_a_cycle() {
    assert_eq!(isoperimetric_number(&four_cycle()).unwrap(), 1.0);
}

#[test]
fn isoperimetric_number_of_a_triangle() {
    let triangle = Hypergraph::from_edges(
        false,
        [
            Edge::undirected([1, 2]).unwrap(),
            Edge::undirected([2, 3]).unwrap(),
            Edge::undirected([1, 3]).unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(isoperimetric_number(&triangle).unwrap(), 2.0);
}

#[test]
fn isoperimetric_number_of_a_single_edge() {
    let pair = Hypergraph::from_edges(false, [Edge::undirected([1, 2]).unwrap()]).unwrap();
    assert_eq!(isoperimetric_number(&pair).unwrap(), 1.0);
}

#[test]
fn isoperimetric_number_is_infinite_without_subsets() {
    let mut single = Hypergraph::new(false);
    single.add_vertex(1);
    assert!(isoperimetric_number(&single).unwrap().is_infinite());
}
