//! The `layout` entry point: runs every phase in order on one graph.

use crate::graphlib::EdgeKey;
use crate::{
    EdgeLabel, LayoutGraph, Point, acyclic, coordinate_system, normalize, order, position, rank,
    tier_floor,
};

/// Lays out `g` in place, filling `x`/`y` (box centers) and `rank`/`order` of every node.
///
/// The graph should be a multigraph; parallel edges and self-loops are accepted. Node `tier`
/// values act as rank floors. The drawing is translated so its bounding box starts at
/// `(marginx, marginy)`.
pub fn layout(g: &mut LayoutGraph) {
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "layered layout: start"
    );
    let self_loops = remove_self_loops(g);

    acyclic::run(g);
    tier_floor::run(g);
    rank::rank(g);
    tier_floor::cleanup(g);
    normalize::run(g);
    coordinate_system::adjust(g);
    order::order(g);
    position::position(g);
    normalize::undo(g);
    coordinate_system::undo(g);
    acyclic::undo(g);

    for (key, label) in self_loops {
        g.set_edge_key(key, label);
    }
    translate(g);
    tracing::debug!(nodes = g.node_count(), "layered layout: done");
}

fn remove_self_loops(g: &mut LayoutGraph) -> Vec<(EdgeKey, EdgeLabel)> {
    let mut removed = Vec::new();
    for e in g.edge_keys() {
        if !e.is_self_loop() {
            continue;
        }
        if let Some(label) = g.edge_by_key(&e).cloned() {
            g.remove_edge_key(&e);
            removed.push((e, label));
        }
    }
    removed
}

fn translate(g: &mut LayoutGraph) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    g.for_each_node(|_id, n| {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            min_x = min_x.min(x - n.width / 2.0);
            min_y = min_y.min(y - n.height / 2.0);
        }
    });
    if !min_x.is_finite() || !min_y.is_finite() {
        return;
    }
    let dx = g.graph().marginx - min_x;
    let dy = g.graph().marginy - min_y;
    g.for_each_node_mut(|_id, n| {
        n.x = n.x.map(|x| x + dx);
        n.y = n.y.map(|y| y + dy);
    });
}

/// Laid-out centers in node order. Nodes without coordinates are skipped.
pub fn node_centers(g: &LayoutGraph) -> Vec<(String, Point)> {
    let mut out = Vec::with_capacity(g.node_count());
    g.for_each_node(|id, n| {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            out.push((id.to_string(), Point { x, y }));
        }
    });
    out
}
