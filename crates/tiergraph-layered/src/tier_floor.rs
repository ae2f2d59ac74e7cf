//! Tier floors.
//!
//! A temporary root gets one zero-weight edge to every node with `minlen = tier + 1`. Ranking
//! then keeps each node at least `tier` ranks below the first band under the root, and the root
//! joins every component into one connected graph for the network simplex.

use crate::util::unique_node_id;
use crate::{DummyKind, EdgeLabel, LayoutGraph, NodeLabel};

pub fn run(g: &mut LayoutGraph) {
    let nodes = g.node_ids();
    let root = unique_node_id(g, "_root");
    g.set_node(
        root.clone(),
        NodeLabel {
            dummy: Some(DummyKind::Root),
            ..Default::default()
        },
    );
    for v in nodes {
        let tier = g.node(&v).and_then(|n| n.tier).unwrap_or(0).max(0);
        let minlen = usize::try_from(tier).unwrap_or(0) + 1;
        g.set_edge_named(root.clone(), v, None::<String>, Some(EdgeLabel::new(0.0, minlen)));
    }
    g.graph_mut().root = Some(root);
}

/// Removes the root and re-bases ranks so the first band below it is rank 0.
///
/// The root is lifted to the lowest rank its edges allow before re-basing, so a root that the
/// ranker left floating above the graph does not open empty bands at the top.
pub fn cleanup(g: &mut LayoutGraph) {
    let Some(root) = g.graph_mut().root.take() else {
        return;
    };
    let base = g
        .out_edges(&root, None)
        .iter()
        .filter_map(|e| {
            let rank = g.node(&e.w)?.rank?;
            let minlen = g.edge_by_key(e)?.minlen;
            Some(rank - i32::try_from(minlen).unwrap_or(i32::MAX))
        })
        .min();
    g.remove_node(&root);

    let Some(base) = base else {
        return;
    };
    g.for_each_node_mut(|_id, n| {
        if let Some(rank) = n.rank.as_mut() {
            *rank -= base + 1;
        }
    });
}
