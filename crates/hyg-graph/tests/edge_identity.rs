use hyg_graph::Edge;

#[test]
fn headless_and_headed_edges_are_distinct() {
    let plain = Edge::undirected([1, 2]).unwrap();
    let headed = Edge::directed([1, 2], 1).unwrap();
    assert_ne!(plain, headed);
}

#[test]
fn vertex_order_is_irrelevant() {
    assert_eq!(
        Edge::undirected([1, 2]).unwrap(),
        Edge::undirected([2, 1]).unwrap()
    );
    assert_eq!(
        Edge::directed([1, 2], 2).unwrap(),
        Edge::directed([2, 1], 2).unwrap()
    );
}

#[test]
fn heads_distinguish_edges_over_the_same_set() {
    assert_ne!(
        Edge::directed([1, 2], 1).unwrap(),
        Edge::directed([1, 2], 2).unwrap()
    );
}

#[test]
fn duplicate_vertices_collapse() {
    let edge = Edge::undirected([1, 1, 2]).unwrap();
    assert_eq!(edge.arity(), 2);
}

#[test]
fn tail_is_the_set_minus_the_head() {
    let edge = Edge::directed([1, 2, 3], 2).unwrap();
    assert_eq!(edge.head(), Some(&2));
    assert_eq!(edge.tail().into_iter().collect::<Vec<_>>(), vec![1, 3]);

    let plain = Edge::undirected([1, 2, 3]).unwrap();
    assert_eq!(plain.head(), None);
    assert_eq!(&plain.tail(), plain.vertices());
}

#[test]
fn construction_rejects_invalid_edges() {
    let error = Edge::<i32>::undirected([]).unwrap_err();
    assert_eq!(error.code(), "empty-edge");

    let error = Edge::directed([1, 2], 9).unwrap_err();
    assert_eq!(error.code(), "head-not-member");
}

#[test]
fn with_head_reorients_without_changing_the_set() {
    let edge = Edge::directed([1, 2, 3], 1).unwrap();
    let reoriented = edge.with_head(3).unwrap();
    assert_eq!(reoriented.vertices(), edge.vertices());
    assert_eq!(reoriented.head(), Some(&3));
}
