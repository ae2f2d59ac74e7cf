//! Long-edge normalization.
//!
//! Every edge spanning more than one rank is replaced by a chain of zero-size dummy nodes, one per
//! intermediate rank, so ordering and positioning only ever see rank-adjacent edges. The first
//! dummy of each chain is recorded in `GraphLabel::dummy_chains`; `undo` removes the chains and
//! restores the original edges.

use crate::graphlib::EdgeKey;
use crate::util::unique_node_id;
use crate::{DummyKind, EdgeLabel, LayoutGraph, NodeLabel};

pub fn run(g: &mut LayoutGraph) {
    g.graph_mut().dummy_chains.clear();
    for e in g.edge_keys() {
        normalize_edge(g, e);
    }
    let chains = g.graph().dummy_chains.len();
    if chains > 0 {
        tracing::trace!(chains, "normalize: split long edges");
    }
}

fn normalize_edge(g: &mut LayoutGraph, e: EdgeKey) {
    let (Some(v_rank), Some(w_rank)) = (
        g.node(&e.v).and_then(|n| n.rank),
        g.node(&e.w).and_then(|n| n.rank),
    ) else {
        return;
    };
    if w_rank <= v_rank + 1 {
        return;
    }
    let Some(label) = g.edge_by_key(&e).cloned() else {
        return;
    };
    g.remove_edge_key(&e);

    let mut prev = e.v.clone();
    for rank in v_rank + 1..w_rank {
        let dummy = unique_node_id(g, "_d");
        g.set_node(
            dummy.clone(),
            NodeLabel {
                rank: Some(rank),
                dummy: Some(DummyKind::Edge),
                edge_label: Some(label.clone()),
                edge_obj: Some(e.clone()),
                ..Default::default()
            },
        );
        if rank == v_rank + 1 {
            g.graph_mut().dummy_chains.push(dummy.clone());
        }
        g.set_edge_named(
            prev,
            dummy.clone(),
            e.name.clone(),
            Some(EdgeLabel::new(label.weight, 1)),
        );
        prev = dummy;
    }
    g.set_edge_named(
        prev,
        e.w.clone(),
        e.name.clone(),
        Some(EdgeLabel::new(label.weight, 1)),
    );
}

pub fn undo(g: &mut LayoutGraph) {
    let chains = std::mem::take(&mut g.graph_mut().dummy_chains);
    for start in chains {
        let Some(node) = g.node(&start) else {
            continue;
        };
        let (Some(label), Some(edge_obj)) = (node.edge_label.clone(), node.edge_obj.clone())
        else {
            continue;
        };

        let mut v = start;
        while g.node(&v).is_some_and(NodeLabel::is_dummy) {
            let next = g.successors(&v).first().map(|s| s.to_string());
            g.remove_node(&v);
            match next {
                Some(w) => v = w,
                None => break,
            }
        }
        g.set_edge_key(edge_obj, label);
    }
}
