use tiergraph_layered::graphlib::{Graph, GraphOptions, alg};
use tiergraph_layered::{Acyclicer, EdgeLabel, GraphLabel, LayoutGraph, acyclic};

fn new_graph(acyclicer: Acyclicer) -> LayoutGraph {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        acyclicer,
        ..Default::default()
    });
    g
}

fn sorted_edges(g: &LayoutGraph) -> Vec<(String, String, Option<String>)> {
    let mut edges: Vec<(String, String, Option<String>)> = g
        .edges()
        .map(|e| (e.v.clone(), e.w.clone(), e.name.clone()))
        .collect();
    edges.sort();
    edges
}

#[test]
fn leaves_an_acyclic_graph_untouched() {
    for acyclicer in [Acyclicer::Greedy, Acyclicer::Dfs] {
        let mut g = new_graph(acyclicer);
        g.set_path(&["a", "b", "d"]);
        g.set_path(&["a", "c", "d"]);
        let before = sorted_edges(&g);

        acyclic::run(&mut g);
        assert_eq!(sorted_edges(&g), before);
    }
}

#[test]
fn breaks_cycles_and_undo_restores_them() {
    for acyclicer in [Acyclicer::Greedy, Acyclicer::Dfs] {
        let mut g = new_graph(acyclicer);
        g.set_path(&["a", "b", "c", "d", "a"]);
        g.set_edge("c", "a");
        let before = sorted_edges(&g);

        acyclic::run(&mut g);
        assert!(alg::is_acyclic(&g));
        assert_eq!(g.edge_count(), before.len());

        acyclic::undo(&mut g);
        assert_eq!(sorted_edges(&g), before);
        g.for_each_edge(|_e, lbl| {
            assert!(!lbl.reversed);
            assert!(lbl.forward_name.is_none());
        });
    }
}

#[test]
fn dfs_reverses_the_back_edge_and_names_it() {
    let mut g = new_graph(Acyclicer::Dfs);
    g.set_path(&["a", "b", "c", "a"]);

    acyclic::run(&mut g);

    assert!(!g.has_edge("c", "a", None));
    let reversed = g.edge("a", "c", Some("rev1")).cloned();
    assert_eq!(
        reversed.map(|lbl| (lbl.reversed, lbl.forward_name)),
        Some((true, None))
    );
}

#[test]
fn undo_brings_back_the_original_edge_name() {
    let mut g = new_graph(Acyclicer::Dfs);
    g.set_edge("a", "b");
    g.set_edge_named("b", "a", Some("back"), Some(EdgeLabel::new(3.0, 2)));

    acyclic::run(&mut g);
    assert!(g.has_edge("a", "b", Some("rev1")));

    acyclic::undo(&mut g);
    assert_eq!(
        g.edge("b", "a", Some("back")),
        Some(&EdgeLabel::new(3.0, 2))
    );
}

#[test]
fn self_loops_are_not_reversed() {
    for acyclicer in [Acyclicer::Greedy, Acyclicer::Dfs] {
        let mut g = new_graph(acyclicer);
        g.set_edge("a", "a");
        g.set_edge("a", "b");

        acyclic::run(&mut g);
        assert!(g.has_edge("a", "a", None));
        assert!(g.has_edge("a", "b", None));
    }
}

#[test]
fn greedy_keeps_the_heavier_direction() {
    let mut g = new_graph(Acyclicer::Greedy);
    g.set_edge_with_label("a", "b", EdgeLabel::new(5.0, 1));
    g.set_edge_with_label("b", "a", EdgeLabel::new(1.0, 1));

    acyclic::run(&mut g);
    assert!(g.has_edge("a", "b", None));
    assert!(g.has_edge("a", "b", Some("rev1")));
    assert!(!g.has_edge("b", "a", None));
}
