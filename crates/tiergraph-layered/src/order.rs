//! Crossing minimization.
//!
//! Starting from a depth-first initial order, layers are re-sorted by weighted barycenter in
//! alternating up and down sweeps. The ordering with the fewest weighted crossings wins; the loop
//! stops after `order_patience` sweeps without improvement.

mod barycenter;
mod cross_count;
mod init_order;

pub use barycenter::{SortEntry, sort};
pub use cross_count::cross_count;
pub use init_order::init_order;

use crate::LayoutGraph;
use rustc_hash::FxHashMap;

/// Index-based view of the ranked graph: one layer per rank (offset from the smallest rank) and
/// weighted neighbour lists with parallel edges merged.
#[derive(Debug, Default)]
pub(crate) struct OrderGraph {
    pub ids: Vec<String>,
    pub ix_of: FxHashMap<String, usize>,
    pub layer: Vec<Option<usize>>,
    pub layer_count: usize,
    pub preds: Vec<Vec<(usize, f64)>>,
    pub succs: Vec<Vec<(usize, f64)>>,
}

impl OrderGraph {
    pub fn from_graph(g: &LayoutGraph) -> Self {
        let ids = g.node_ids();
        let ix_of: FxHashMap<String, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        let ranks: Vec<Option<i32>> = ids
            .iter()
            .map(|v| g.node(v).and_then(|n| n.rank))
            .collect();
        let min_rank = ranks.iter().flatten().copied().min().unwrap_or(0);
        let max_rank = ranks.iter().flatten().copied().max();
        let layer: Vec<Option<usize>> = ranks
            .iter()
            .map(|r| r.map(|r| (r - min_rank) as usize))
            .collect();
        let layer_count = max_rank.map_or(0, |max| (max - min_rank + 1) as usize);

        let n = ids.len();
        let mut og = OrderGraph {
            preds: vec![Vec::new(); n],
            succs: vec![Vec::new(); n],
            ..Default::default()
        };
        let mut pair_slot: FxHashMap<(usize, usize), (usize, usize)> = FxHashMap::default();
        g.for_each_edge(|e, lbl| {
            if e.is_self_loop() {
                return;
            }
            let (Some(&v), Some(&w)) = (ix_of.get(e.v.as_str()), ix_of.get(e.w.as_str())) else {
                return;
            };
            match pair_slot.get(&(v, w)) {
                Some(&(si, pi)) => {
                    og.succs[v][si].1 += lbl.weight;
                    og.preds[w][pi].1 += lbl.weight;
                }
                None => {
                    pair_slot.insert((v, w), (og.succs[v].len(), og.preds[w].len()));
                    og.succs[v].push((w, lbl.weight));
                    og.preds[w].push((v, lbl.weight));
                }
            }
        });

        og.ids = ids;
        og.ix_of = ix_of;
        og.layer = layer;
        og.layer_count = layer_count;
        og
    }

    pub fn to_indices(&self, layering: &[Vec<String>]) -> Vec<Vec<usize>> {
        layering
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .filter_map(|v| self.ix_of.get(v).copied())
                    .collect()
            })
            .collect()
    }
}

pub fn order(g: &mut LayoutGraph) {
    let og = OrderGraph::from_graph(g);
    if og.layer_count == 0 {
        return;
    }
    let patience = g.graph().order_patience.max(1);

    let mut layering = init_order::init_layering(&og);
    let mut best = layering.clone();
    let mut best_cc = cross_count::count(&og, &layering);
    let mut since_best = 0usize;
    let mut sweep = 0usize;
    while since_best < patience && best_cc > 0.0 {
        let down = sweep % 2 == 1;
        let bias_right = sweep % 4 >= 2;
        sweep_layers(&og, &mut layering, down, bias_right);
        let cc = cross_count::count(&og, &layering);
        tracing::trace!(sweep, crossings = cc, best = best_cc, "order: sweep");
        if cc < best_cc {
            best_cc = cc;
            best = layering.clone();
            since_best = 0;
        } else {
            since_best += 1;
        }
        sweep += 1;
    }

    for layer in &best {
        for (i, &v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(&og.ids[v]) {
                n.order = Some(i);
            }
        }
    }
}

/// Re-sorts every layer against its already-placed neighbour layer: predecessors when sweeping
/// down, successors when sweeping up.
fn sweep_layers(og: &OrderGraph, layering: &mut [Vec<usize>], down: bool, bias_right: bool) {
    let mut pos = vec![0usize; og.ids.len()];
    for layer in layering.iter() {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }

    let layers: Vec<usize> = if down {
        (1..layering.len()).collect()
    } else {
        (0..layering.len().saturating_sub(1)).rev().collect()
    };
    for r in layers {
        let fixed = if down { r - 1 } else { r + 1 };
        let entries: Vec<SortEntry<usize>> = layering[r]
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let neighbours = if down { &og.preds[v] } else { &og.succs[v] };
                let (barycenter, weight) = barycenter::barycenter(
                    neighbours
                        .iter()
                        .filter(|(u, _)| og.layer[*u] == Some(fixed))
                        .map(|&(u, weight)| (pos[u], weight)),
                );
                SortEntry {
                    vs: vec![v],
                    i,
                    barycenter,
                    weight,
                }
            })
            .collect();
        let sorted = sort(entries, bias_right);
        for (i, &v) in sorted.vs.iter().enumerate() {
            pos[v] = i;
        }
        layering[r] = sorted.vs;
    }
}
