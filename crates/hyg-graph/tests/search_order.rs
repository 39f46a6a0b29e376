use hyg_graph::{breadth_first_search, depth_first_search, Edge, Hypergraph};

fn undirected_tree() -> Hypergraph<i32> {
    Hypergraph::from_edges(
        false,
        [
            Edge::undirected([1, 2]).unwrap(),
            Edge::undirected([1, 3]).unwrap(),
            Edge::undirected([2, 4]).unwrap(),
            Edge::undirected([2, 5]).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn breadth_first_yields_start_then_discovery_order() {
    let tree = undirected_tree();
    let order: Vec<i32> = breadth_first_search(&tree, &1).unwrap().collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
}

#[test]
fn depth_first_explores_branches_before_siblings() {
    let tree = undirected_tree();
    let order: Vec<i32> = depth_first_search(&tree, &1).unwrap().collect();
    assert_eq!(order, vec![1, 2, 4, 5, 3]);
}

#[test]
fn cycles_are_visited_exactly_once() {
    let triangle = Hypergraph::from_edges(
        false,
        [
            Edge::undirected([1, 2]).unwrap(),
            Edge::undirected([2, 3]).unwrap(),
            Edge::undirected([1, 3]).unwrap(),
        ],
    )
    .unwrap();
    let order: Vec<i32> = breadth_first_search(&triangle, &2).unwrap().collect();
    assert_eq!(order, vec![2, 1, 3]);
    let order: Vec<i32> = depth_first_search(&triangle, &2).unwrap().collect();
    assert_eq!(order, vec![2, 1, 3]);
}

#[test]
fn directed_traversal_only_follows_outgoing_edges() {
    let chain = Hypergraph::from_edges(
        true,
        [
            Edge::directed([1, 2], 2).unwrap(),
            Edge::directed([2, 3], 3).unwrap(),
        ],
    )
    .unwrap();
    let order: Vec<i32> = breadth_first_search(&chain, &2).unwrap().collect();
    assert_eq!(order, vec![2, 3]);
}

#[test]
fn directed_hyperedges_lead_from_tail_members_to_the_head() {
    let hypergraph =
        Hypergraph::from_edges(true, [Edge::directed([1, 2, 3], 3).unwrap()]).unwrap();
    let order: Vec<i32> = breadth_first_search(&hypergraph, &1).unwrap().collect();
    assert_eq!(order, vec![1, 3]);
    // the head is a sink for this edge
    let order: Vec<i32> = breadth_first_search(&hypergraph, &3).unwrap().collect();
    assert_eq!(order, vec![3]);
}

#[test]
fn undirected_hyperedges_reach_every_other_member() {
    let hypergraph =
        Hypergraph::from_edges(false, [Edge::undirected([1, 2, 3]).unwrap()]).unwrap();
    let order: Vec<i32> = breadth_first_search(&hypergraph, &2).unwrap().collect();
    assert_eq!(order, vec![2, 1, 3]);
}

#[test]
fn traversal_can_stop_early() {
    let tree = undirected_tree();
    let prefix: Vec<i32> = breadth_first_search(&tree, &1).unwrap().take(2).collect();
    assert_eq!(prefix, vec![1, 2]);
}

#[test]
fn unknown_start_vertex_is_rejected() {
    let tree = undirected_tree();
    assert_eq!(
        breadth_first_search(&tree, &9).unwrap_err().code(),
        "unknown-vertex"
    );
    assert_eq!(
        depth_first_search(&tree, &9).unwrap_err().code(),
        "unknown-vertex"
    );
}
