use tiergraph_layered::graphlib::{Graph, GraphOptions};
use tiergraph_layered::{DummyKind, EdgeLabel, LayoutGraph, NodeLabel, normalize};

fn ranked(rank: i32) -> NodeLabel {
    NodeLabel {
        rank: Some(rank),
        ..Default::default()
    }
}

fn new_graph() -> LayoutGraph {
    Graph::new(GraphOptions { multigraph: true })
}

#[test]
fn adjacent_edges_are_left_alone() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(1));
    g.set_edge("a", "b");

    normalize::run(&mut g);

    assert_eq!(g.node_count(), 2);
    assert!(g.has_edge("a", "b", None));
    assert!(g.graph().dummy_chains.is_empty());
}

#[test]
fn long_edges_become_dummy_chains() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(3));
    g.set_edge_named("a", "b", Some("rel"), Some(EdgeLabel::new(2.0, 1)));

    normalize::run(&mut g);

    assert_eq!(g.node_count(), 4);
    assert_eq!(g.graph().dummy_chains, vec!["_d".to_string()]);
    assert!(!g.has_edge("a", "b", Some("rel")));

    let dummy = g.node("_d").cloned().unwrap_or_default();
    assert_eq!(dummy.rank, Some(1));
    assert_eq!(dummy.dummy, Some(DummyKind::Edge));
    assert_eq!(dummy.width, 0.0);
    assert_eq!(g.node("_d1").and_then(|n| n.rank), Some(2));

    assert_eq!(g.edge("a", "_d", Some("rel")).map(|l| l.weight), Some(2.0));
    assert!(g.has_edge("_d", "_d1", Some("rel")));
    assert!(g.has_edge("_d1", "b", Some("rel")));
}

#[test]
fn undo_restores_the_original_edge() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(2));
    g.set_node("c", ranked(4));
    g.set_edge_with_label("a", "b", EdgeLabel::new(2.0, 2));
    g.set_edge_with_label("a", "c", EdgeLabel::new(1.0, 4));

    normalize::run(&mut g);
    assert_eq!(g.node_count(), 7);

    normalize::undo(&mut g);

    assert_eq!(g.node_ids(), vec!["a", "b", "c"]);
    assert_eq!(g.edge("a", "b", None), Some(&EdgeLabel::new(2.0, 2)));
    assert_eq!(g.edge("a", "c", None), Some(&EdgeLabel::new(1.0, 4)));
    assert!(g.graph().dummy_chains.is_empty());
}
