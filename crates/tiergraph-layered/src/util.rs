//! Helpers shared by the layout phases.

use crate::graphlib::{Graph, GraphOptions};
use crate::{EdgeLabel, NodeLabel};
use rustc_hash::FxHashMap;

/// Collapses parallel edges into one edge per ordered pair: weights are summed and the largest
/// `minlen` wins. Node labels and node order are kept.
pub fn simplify<G>(g: &Graph<NodeLabel, EdgeLabel, G>) -> Graph<NodeLabel, EdgeLabel, G>
where
    G: Default + Clone,
{
    let mut simplified: Graph<NodeLabel, EdgeLabel, G> = Graph::new(GraphOptions::default());
    simplified.set_graph(g.graph().clone());
    g.for_each_node(|v, lbl| {
        simplified.set_node(v, lbl.clone());
    });

    let mut merged: Vec<(String, String, EdgeLabel)> = Vec::new();
    let mut index: FxHashMap<(String, String), usize> = FxHashMap::default();
    g.for_each_edge(|e, lbl| {
        let key = (e.v.clone(), e.w.clone());
        match index.get(&key) {
            Some(&i) => {
                let entry = &mut merged[i].2;
                entry.weight += lbl.weight;
                entry.minlen = entry.minlen.max(lbl.minlen.max(1));
            }
            None => {
                index.insert(key, merged.len());
                merged.push((
                    e.v.clone(),
                    e.w.clone(),
                    EdgeLabel::new(lbl.weight, lbl.minlen.max(1)),
                ));
            }
        }
    });

    for (v, w, lbl) in merged {
        simplified.set_edge_with_label(v, w, lbl);
    }
    simplified
}

/// Shifts ranks so that the smallest one becomes zero.
pub fn normalize_ranks<G>(g: &mut Graph<NodeLabel, EdgeLabel, G>)
where
    G: Default,
{
    let mut min_rank = i32::MAX;
    g.for_each_node(|_id, n| {
        if let Some(rank) = n.rank {
            min_rank = min_rank.min(rank);
        }
    });
    if min_rank == i32::MAX {
        return;
    }
    g.for_each_node_mut(|_id, n| {
        if let Some(rank) = n.rank.as_mut() {
            *rank -= min_rank;
        }
    });
}

/// Groups ranked nodes into layers (index 0 is the smallest rank present), each layer sorted by
/// `order` and then by node order.
pub fn build_layer_matrix<G>(g: &Graph<NodeLabel, EdgeLabel, G>) -> Vec<Vec<String>>
where
    G: Default,
{
    let mut min_rank = i32::MAX;
    let mut max_rank = i32::MIN;
    let mut entries: Vec<(i32, usize, String)> = Vec::new();
    g.for_each_node(|id, n| {
        let Some(rank) = n.rank else {
            return;
        };
        min_rank = min_rank.min(rank);
        max_rank = max_rank.max(rank);
        entries.push((rank, n.order.unwrap_or(usize::MAX), id.to_string()));
    });
    if entries.is_empty() {
        return Vec::new();
    }

    let mut layers: Vec<Vec<(usize, String)>> =
        vec![Vec::new(); (max_rank - min_rank + 1) as usize];
    for (rank, order, id) in entries {
        layers[(rank - min_rank) as usize].push((order, id));
    }
    layers
        .into_iter()
        .map(|mut layer| {
            // Stable: equal orders keep node order.
            layer.sort_by_key(|(order, _)| *order);
            layer.into_iter().map(|(_, id)| id).collect()
        })
        .collect()
}

/// Returns `prefix`, or `prefix` followed by the first counter that is not already a node id.
pub fn unique_node_id<G>(g: &Graph<NodeLabel, EdgeLabel, G>, prefix: &str) -> String
where
    G: Default,
{
    if !g.has_node(prefix) {
        return prefix.to_string();
    }
    (1usize..)
        .map(|i| format!("{prefix}{i}"))
        .find(|id| !g.has_node(id))
        .unwrap_or_else(|| prefix.to_string())
}
