//! Weighted crossing count.
//!
//! Barth, Jünger & Mutzel's bilayer count with an accumulator tree: edges between two layers are
//! visited in north order, and each one crosses every already-inserted edge that lands further
//! east on the south layer.

use super::OrderGraph;
use crate::LayoutGraph;

pub fn cross_count(g: &LayoutGraph, layering: &[Vec<String>]) -> f64 {
    let og = OrderGraph::from_graph(g);
    count(&og, &og.to_indices(layering))
}

pub(crate) fn count(og: &OrderGraph, layering: &[Vec<usize>]) -> f64 {
    let mut pos = vec![usize::MAX; og.ids.len()];
    for layer in layering {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }
    layering
        .windows(2)
        .map(|pair| bilayer_count(og, &pos, &pair[0], &pair[1]))
        .sum()
}

fn bilayer_count(og: &OrderGraph, pos: &[usize], north: &[usize], south: &[usize]) -> f64 {
    if south.is_empty() {
        return 0.0;
    }
    let in_south = |w: usize| pos[w] != usize::MAX && south.get(pos[w]) == Some(&w);

    let mut south_entries: Vec<(usize, f64)> = Vec::new();
    for &v in north {
        let start = south_entries.len();
        south_entries.extend(
            og.succs[v]
                .iter()
                .filter(|&&(w, _)| in_south(w))
                .map(|&(w, weight)| (pos[w], weight)),
        );
        south_entries[start..].sort_by_key(|&(p, _)| p);
    }

    let mut first_index = south.len().next_power_of_two();
    let mut tree = vec![0.0f64; 2 * first_index - 1];
    first_index -= 1;

    let mut crossings = 0.0;
    for (p, weight) in south_entries {
        let mut index = p + first_index;
        tree[index] += weight;
        let mut east = 0.0;
        while index > 0 {
            if index % 2 == 1 {
                east += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += weight;
        }
        crossings += weight * east;
    }
    crossings
}
