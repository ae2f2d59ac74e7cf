use tiergraph_layered::graphlib::{Graph, GraphOptions};
use tiergraph_layered::{
    EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, RankDir, Ranker, layout, node_centers,
};

fn new_graph(label: GraphLabel) -> LayoutGraph {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(label);
    g
}

fn center(g: &LayoutGraph, v: &str) -> (f64, f64) {
    let n = g.node(v).cloned().unwrap_or_default();
    (n.x.unwrap_or(f64::NAN), n.y.unwrap_or(f64::NAN))
}

fn rank_of(g: &LayoutGraph, v: &str) -> Option<i32> {
    g.node(v).and_then(|n| n.rank)
}

#[test]
fn single_node_sits_at_the_margin() {
    let mut g = new_graph(GraphLabel {
        marginx: 10.0,
        marginy: 20.0,
        ..Default::default()
    });
    g.set_node("a", NodeLabel::sized(100.0, 50.0));

    layout(&mut g);

    assert_eq!(center(&g, "a"), (60.0, 45.0));
}

#[test]
fn edge_places_target_one_rank_below() {
    let mut g = new_graph(GraphLabel {
        ranksep: 50.0,
        ..Default::default()
    });
    g.set_node("a", NodeLabel::sized(100.0, 50.0));
    g.set_node("b", NodeLabel::sized(100.0, 50.0));
    g.set_edge("a", "b");

    layout(&mut g);

    assert_eq!(center(&g, "a"), (50.0, 25.0));
    assert_eq!(center(&g, "b"), (50.0, 125.0));
}

#[test]
fn rankdir_rotates_the_drawing() {
    for rankdir in [RankDir::TB, RankDir::BT, RankDir::LR, RankDir::RL] {
        let mut g = new_graph(GraphLabel {
            rankdir,
            ..Default::default()
        });
        g.set_node("a", NodeLabel::sized(100.0, 50.0));
        g.set_node("b", NodeLabel::sized(100.0, 50.0));
        g.set_edge("a", "b");

        layout(&mut g);

        let (ax, ay) = center(&g, "a");
        let (bx, by) = center(&g, "b");
        match rankdir {
            RankDir::TB => assert!(by > ay && ax == bx),
            RankDir::BT => assert!(by < ay && ax == bx),
            RankDir::LR => assert!(bx > ax && ay == by),
            RankDir::RL => assert!(bx < ax && ay == by),
        }
        assert_eq!(g.node("a").map(|n| (n.width, n.height)), Some((100.0, 50.0)));
    }
}

#[test]
fn tier_floors_push_nodes_down_without_empty_bands() {
    let mut g = new_graph(GraphLabel {
        ranksep: 30.0,
        ..Default::default()
    });
    g.set_node("top", NodeLabel::sized(100.0, 40.0).with_tier(0));
    g.set_node("leaf", NodeLabel::sized(100.0, 20.0).with_tier(2));

    layout(&mut g);

    assert_eq!(rank_of(&g, "top"), Some(0));
    assert_eq!(rank_of(&g, "leaf"), Some(2));
    assert_eq!(center(&g, "leaf").1 - center(&g, "top").1, 20.0 + 30.0 + 10.0);
    assert!(!g.has_node("_root"));
}

#[test]
fn minlen_can_push_below_the_tier_floor() {
    let mut g = new_graph(GraphLabel::default());
    g.set_node("c", NodeLabel::sized(10.0, 10.0).with_tier(0));
    g.set_node("s", NodeLabel::sized(10.0, 10.0).with_tier(1));
    g.set_edge_with_label("c", "s", EdgeLabel::new(1.0, 2));

    layout(&mut g);

    assert_eq!(rank_of(&g, "c"), Some(0));
    assert_eq!(rank_of(&g, "s"), Some(2));
}

#[test]
fn every_node_respects_its_tier() {
    for ranker in [Ranker::NetworkSimplex, Ranker::LongestPath] {
        let mut g = new_graph(GraphLabel {
            ranker,
            ..Default::default()
        });
        for (v, tier) in [("c1", 0), ("c2", 0), ("s1", 1), ("s2", 1), ("l1", 2), ("l2", 2)] {
            g.set_node(v, NodeLabel::sized(50.0, 20.0).with_tier(tier));
        }
        g.set_edge_with_label("c1", "s1", EdgeLabel::new(2.0, 1));
        g.set_edge_with_label("s1", "l1", EdgeLabel::new(2.0, 1));
        g.set_edge_with_label("s2", "c2", EdgeLabel::new(1.0, 2));
        g.set_edge_with_label("l2", "s1", EdgeLabel::new(1.0, 2));

        layout(&mut g);

        for (v, tier) in [("c1", 0), ("c2", 0), ("s1", 1), ("s2", 1), ("l1", 2), ("l2", 2)] {
            let rank = rank_of(&g, v).unwrap_or(-1);
            assert!(rank >= tier, "{ranker:?}: {v} has rank {rank} above tier {tier}");
        }
    }
}

#[test]
fn cycles_and_self_loops_survive_layout() {
    let mut g = new_graph(GraphLabel::default());
    g.set_node("a", NodeLabel::sized(30.0, 30.0));
    g.set_node("b", NodeLabel::sized(30.0, 30.0));
    g.set_edge("a", "b");
    g.set_edge_named("b", "a", Some("back"), Some(EdgeLabel::default()));
    g.set_edge("b", "b");

    layout(&mut g);

    assert_eq!(g.node_ids(), vec!["a", "b"]);
    assert!(g.has_edge("a", "b", None));
    assert!(g.has_edge("b", "a", Some("back")));
    assert!(g.has_edge("b", "b", None));
    g.for_each_edge(|_e, lbl| assert!(!lbl.reversed));
    assert_eq!(node_centers(&g).len(), 2);
}

#[test]
fn long_edges_leave_no_dummies_behind() {
    let mut g = new_graph(GraphLabel::default());
    g.set_path(&["a", "b", "c", "d"]);
    g.set_edge("a", "d");

    layout(&mut g);

    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(rank_of(&g, "d"), Some(3));
    assert!(g.graph().dummy_chains.is_empty());
}

#[test]
fn same_rank_boxes_do_not_overlap() {
    let mut g = new_graph(GraphLabel {
        nodesep: 25.0,
        ..Default::default()
    });
    g.set_node("root", NodeLabel::sized(60.0, 20.0));
    let children = [("a", 80.0), ("b", 15.0), ("c", 140.0), ("d", 45.0), ("e", 90.0)];
    for (v, w) in children {
        g.set_node(v, NodeLabel::sized(w, 20.0));
        g.set_edge("root", v);
    }
    g.set_edge("a", "e");

    layout(&mut g);

    let mut boxes: Vec<(i32, f64, f64)> = g
        .node_ids()
        .iter()
        .filter_map(|v| {
            let n = g.node(v)?;
            Some((n.rank?, n.x? - n.width / 2.0, n.x? + n.width / 2.0))
        })
        .collect();
    boxes.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    for pair in boxes.windows(2) {
        if pair[0].0 == pair[1].0 {
            assert!(pair[1].1 - pair[0].2 >= 25.0 - 1e-9, "{pair:?}");
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let build = || {
        let mut g = new_graph(GraphLabel::default());
        for (i, v) in ["p", "q", "r", "s", "t", "u"].into_iter().enumerate() {
            g.set_node(v, NodeLabel::sized(40.0 + 10.0 * i as f64, 20.0));
        }
        g.set_path(&["p", "q", "r"]);
        g.set_path(&["p", "s", "t", "r"]);
        g.set_edge("u", "q");
        g.set_edge("r", "p");
        g
    };

    let mut first = build();
    let mut second = build();
    layout(&mut first);
    layout(&mut second);

    assert_eq!(node_centers(&first), node_centers(&second));
}
