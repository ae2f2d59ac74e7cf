//! Coordinate assignment.
//!
//! `y`: layers are stacked top to bottom; a layer is as tall as its tallest box and consecutive
//! layers are `ranksep` apart. Ranks that hold no node are skipped.
//!
//! `x`: each layer starts packed left to right. Sweeps then pull every node toward the weighted
//! mean `x` of its neighbours in the adjacent layer (predecessors going down, successors going
//! up, both in the final pass) and project the wish list back onto the order-preserving,
//! separation-respecting placements with least squares.

use crate::LayoutGraph;
use crate::order::OrderGraph;
use crate::util::build_layer_matrix;

pub fn position(g: &mut LayoutGraph) {
    let layers = build_layer_matrix(g);
    position_y(g, &layers);
    position_x(g, &layers);
}

fn position_y(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let ranksep = g.graph().ranksep;
    let mut cursor = 0.0;
    for layer in layers.iter().filter(|l| !l.is_empty()) {
        let height = layer
            .iter()
            .filter_map(|v| g.node(v))
            .map(|n| n.height)
            .fold(0.0, f64::max);
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(cursor + height / 2.0);
            }
        }
        cursor += height + ranksep;
    }
}

#[derive(Clone, Copy)]
enum Pull {
    Predecessors,
    Successors,
    Both,
}

fn position_x(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let og = OrderGraph::from_graph(g);
    let layers = og.to_indices(layers);
    let label = g.graph();
    let (nodesep, edgesep, sweeps) = (label.nodesep, label.edgesep, label.position_sweeps);

    let n = og.ids.len();
    let mut width = vec![0.0; n];
    let mut sep = vec![0.0; n];
    for (v, id) in og.ids.iter().enumerate() {
        if let Some(node) = g.node(id) {
            width[v] = node.width;
            sep[v] = if node.is_dummy() { edgesep } else { nodesep };
        }
    }
    let gap = |a: usize, b: usize| width[a] / 2.0 + sep[a] / 2.0 + sep[b] / 2.0 + width[b] / 2.0;

    let mut x = vec![0.0; n];
    for layer in &layers {
        for pair in layer.windows(2) {
            x[pair[1]] = x[pair[0]] + gap(pair[0], pair[1]);
        }
    }

    let mut passes: Vec<(Pull, Vec<usize>)> = Vec::new();
    for sweep in 0..sweeps {
        if sweep % 2 == 0 {
            passes.push((Pull::Predecessors, (1..layers.len()).collect()));
        } else {
            passes.push((
                Pull::Successors,
                (0..layers.len().saturating_sub(1)).rev().collect(),
            ));
        }
    }
    passes.push((Pull::Both, (0..layers.len()).collect()));

    for (pull, order) in passes {
        for r in order {
            let layer = &layers[r];
            if layer.is_empty() {
                continue;
            }
            let mut targets = Vec::with_capacity(layer.len());
            let mut weights = Vec::with_capacity(layer.len());
            for &v in layer {
                let neighbours: Box<dyn Iterator<Item = &(usize, f64)>> = match pull {
                    Pull::Predecessors => Box::new(og.preds[v].iter()),
                    Pull::Successors => Box::new(og.succs[v].iter()),
                    Pull::Both => Box::new(og.preds[v].iter().chain(og.succs[v].iter())),
                };
                let (mut sum, mut total) = (0.0, 0.0);
                for &(u, w) in neighbours {
                    if w > 0.0 && og.layer[u] != og.layer[v] {
                        sum += w * x[u];
                        total += w;
                    }
                }
                if total > 0.0 {
                    targets.push(sum / total);
                    weights.push(total);
                } else {
                    targets.push(x[v]);
                    weights.push(1.0);
                }
            }
            let gaps: Vec<f64> = layer.windows(2).map(|p| gap(p[0], p[1])).collect();
            for (&v, placed) in layer.iter().zip(project(&targets, &weights, &gaps)) {
                x[v] = placed;
            }
        }
    }

    for (v, id) in og.ids.iter().enumerate() {
        if og.layer[v].is_none() {
            continue;
        }
        if let Some(node) = g.node_mut(id) {
            node.x = Some(x[v]);
        }
    }
}

/// Least-squares placement of a row: minimises `sum(weights[i] * (x[i] - targets[i])^2)` subject
/// to `x[i + 1] - x[i] >= gaps[i]`.
///
/// Subtracting the cumulative gaps turns the constraints into plain monotonicity, which the
/// pool-adjacent-violators algorithm solves exactly in linear time.
pub fn project(targets: &[f64], weights: &[f64], gaps: &[f64]) -> Vec<f64> {
    let n = targets.len();
    let mut offsets = vec![0.0; n];
    for i in 1..n {
        offsets[i] = offsets[i - 1] + gaps.get(i - 1).copied().unwrap_or(0.0);
    }

    // (weighted sum, total weight, member count)
    let mut blocks: Vec<(f64, f64, usize)> = Vec::with_capacity(n);
    for i in 0..n {
        let w = weights.get(i).copied().filter(|w| *w > 0.0).unwrap_or(1.0);
        blocks.push((w * (targets[i] - offsets[i]), w, 1));
        while blocks.len() >= 2 {
            let (s1, w1, c1) = blocks[blocks.len() - 1];
            let (s0, w0, c0) = blocks[blocks.len() - 2];
            if s0 / w0 <= s1 / w1 {
                break;
            }
            blocks.pop();
            if let Some(prev) = blocks.last_mut() {
                *prev = (s0 + s1, w0 + w1, c0 + c1);
            }
        }
    }

    let mut out = Vec::with_capacity(n);
    for (sum, weight, count) in blocks {
        let level = sum / weight;
        for _ in 0..count {
            out.push(level + offsets[out.len()]);
        }
    }
    out
}
