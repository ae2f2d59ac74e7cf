use super::OrderGraph;
use crate::LayoutGraph;

/// Initial layering: a depth-first walk over successors, started from every node in rank order
/// (ties in node order). Each node is appended to its layer when first reached.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<String>> {
    let og = OrderGraph::from_graph(g);
    init_layering(&og)
        .into_iter()
        .map(|layer| layer.into_iter().map(|v| og.ids[v].clone()).collect())
        .collect()
}

pub(crate) fn init_layering(og: &OrderGraph) -> Vec<Vec<usize>> {
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); og.layer_count];
    let mut visited = vec![false; og.ids.len()];

    let mut starts: Vec<usize> = (0..og.ids.len())
        .filter(|&v| og.layer[v].is_some())
        .collect();
    starts.sort_by_key(|&v| og.layer[v]);

    let mut stack: Vec<usize> = Vec::new();
    for start in starts {
        stack.push(start);
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            let Some(layer) = og.layer[v] else {
                continue;
            };
            visited[v] = true;
            layers[layer].push(v);
            stack.extend(og.succs[v].iter().rev().map(|&(w, _)| w));
        }
    }
    layers
}
