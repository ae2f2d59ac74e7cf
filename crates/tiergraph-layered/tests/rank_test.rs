use tiergraph_layered::graphlib::{Graph, GraphOptions};
use tiergraph_layered::rank::{longest_path, network_simplex, slack};
use tiergraph_layered::{EdgeLabel, LayoutGraph, NodeLabel};

fn new_graph() -> LayoutGraph {
    Graph::new(GraphOptions { multigraph: true })
}

fn rank_of(g: &LayoutGraph, v: &str) -> i32 {
    g.node(v).and_then(|n| n.rank).unwrap_or(i32::MIN)
}

/// `a -> b` hangs off the start of the chain `a -> c -> d -> e`.
fn short_branch_graph() -> LayoutGraph {
    let mut g = new_graph();
    g.set_edge("a", "b");
    g.set_path(&["a", "c", "d", "e"]);
    g
}

#[test]
fn longest_path_places_sinks_on_rank_zero() {
    let mut g = short_branch_graph();
    longest_path(&mut g);

    assert_eq!(rank_of(&g, "e"), 0);
    assert_eq!(rank_of(&g, "b"), 0);
    assert_eq!(rank_of(&g, "a"), -3);
}

#[test]
fn network_simplex_shortens_slack_edges() {
    let mut g = short_branch_graph();
    network_simplex(&mut g);

    assert_eq!(rank_of(&g, "b") - rank_of(&g, "a"), 1);
    assert_eq!(rank_of(&g, "e") - rank_of(&g, "a"), 3);
}

#[test]
fn network_simplex_honours_minlen() {
    let mut g = new_graph();
    g.set_edge_with_label("a", "b", EdgeLabel::new(1.0, 2));
    g.set_edge("b", "c");
    g.set_edge_with_label("a", "c", EdgeLabel::new(1.0, 1));

    network_simplex(&mut g);

    assert_eq!(rank_of(&g, "b") - rank_of(&g, "a"), 2);
    assert_eq!(rank_of(&g, "c") - rank_of(&g, "b"), 1);
}

#[test]
fn every_edge_is_feasible_after_ranking() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d", "h"]);
    g.set_path(&["a", "e", "g", "h"]);
    g.set_path(&["a", "f", "g"]);
    g.set_edge_with_label("b", "g", EdgeLabel::new(3.0, 2));
    g.set_node("lonely", NodeLabel::default());

    network_simplex(&mut g);

    for e in g.edge_keys() {
        let minlen = g.edge_by_key(&e).map(|l| l.minlen).unwrap_or(1);
        let s = slack(&g, &e.v, &e.w, minlen);
        assert!(s.is_some_and(|s| s >= 0), "edge {e:?} has slack {s:?}");
    }
    assert!(g.node("lonely").and_then(|n| n.rank).is_some());
}

#[test]
fn parallel_edges_are_merged_for_ranking() {
    let mut g = new_graph();
    g.set_edge_named("a", "b", Some("x"), Some(EdgeLabel::new(1.0, 1)));
    g.set_edge_named("a", "b", Some("y"), Some(EdgeLabel::new(1.0, 3)));

    network_simplex(&mut g);
    assert_eq!(rank_of(&g, "b") - rank_of(&g, "a"), 3);
}

#[test]
fn heavy_edges_win_the_tug_of_war() {
    // `c` may sit anywhere between `a` and `d`; the heavy `c -> g` edge drags it down.
    let mut g = new_graph();
    g.set_path(&["a", "b", "x", "y", "d"]);
    g.set_edge_with_label("a", "c", EdgeLabel::new(1.0, 1));
    g.set_edge_with_label("c", "d", EdgeLabel::new(1.0, 1));
    g.set_path(&["d", "e", "f", "g"]);
    g.set_edge_with_label("c", "g", EdgeLabel::new(4.0, 1));

    network_simplex(&mut g);

    assert_eq!(rank_of(&g, "d") - rank_of(&g, "a"), 4);
    assert_eq!(rank_of(&g, "c") - rank_of(&g, "a"), 3);
    assert_eq!(rank_of(&g, "g") - rank_of(&g, "a"), 7);
}
