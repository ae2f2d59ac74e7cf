//! Cycle removal.
//!
//! `run` reverses a feedback arc set so the graph becomes acyclic; reversed edges are renamed
//! `revN` and remember their forward name. `undo` flips them back after positioning.

use crate::graphlib::EdgeKey;
use crate::{Acyclicer, LayoutGraph};
use rustc_hash::FxHashMap;

pub fn run(g: &mut LayoutGraph) {
    let fas = match g.graph().acyclicer {
        Acyclicer::Greedy => crate::greedy_fas::greedy_fas_with_weight(g, |lbl| {
            if lbl.weight.is_finite() {
                lbl.weight.round() as i64
            } else {
                0
            }
        }),
        Acyclicer::Dfs => dfs_fas(g),
    };

    let mut reversed = 0usize;
    for e in fas {
        if e.is_self_loop() {
            continue;
        }
        let Some(mut label) = g.edge_by_key(&e).cloned() else {
            continue;
        };
        g.remove_edge_key(&e);
        label.forward_name = e.name.clone();
        label.reversed = true;
        let name = unique_rev_name(g, &e.w, &e.v);
        g.set_edge_named(e.w, e.v, Some(name), Some(label));
        reversed += 1;
    }
    if reversed > 0 {
        tracing::debug!(reversed, "acyclic: reversed feedback edges");
    }
}

pub fn undo(g: &mut LayoutGraph) {
    for e in g.edge_keys() {
        let Some(mut label) = g.edge_by_key(&e).filter(|l| l.reversed).cloned() else {
            continue;
        };
        g.remove_edge_key(&e);
        let forward_name = label.forward_name.take();
        label.reversed = false;
        g.set_edge_named(e.w, e.v, forward_name, Some(label));
    }
}

fn unique_rev_name(g: &LayoutGraph, v: &str, w: &str) -> String {
    (1usize..)
        .map(|i| format!("rev{i}"))
        .find(|name| !g.has_edge(v, w, Some(name)))
        .unwrap_or_else(|| "rev".to_string())
}

/// Back edges of a depth-first search started from every node in node order.
fn dfs_fas(g: &LayoutGraph) -> Vec<EdgeKey> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unseen,
        OnStack,
        Done,
    }

    let ids: Vec<&str> = g.nodes().collect();
    let ix_of: FxHashMap<&str, usize> = ids.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    let out: Vec<Vec<EdgeKey>> = ids.iter().map(|v| g.out_edges(v, None)).collect();
    let mut mark = vec![Mark::Unseen; ids.len()];
    let mut fas: Vec<EdgeKey> = Vec::new();

    for start in 0..ids.len() {
        if mark[start] != Mark::Unseen {
            continue;
        }
        mark[start] = Mark::OnStack;
        // (node, next out-edge to inspect)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let Some(e) = out[v].get(next) else {
                mark[v] = Mark::Done;
                stack.pop();
                continue;
            };
            top.1 += 1;
            if e.is_self_loop() {
                continue;
            }
            let Some(&w) = ix_of.get(e.w.as_str()) else {
                continue;
            };
            match mark[w] {
                Mark::OnStack => fas.push(e.clone()),
                Mark::Unseen => {
                    mark[w] = Mark::OnStack;
                    stack.push((w, 0));
                }
                Mark::Done => {}
            }
        }
    }
    fas
}
