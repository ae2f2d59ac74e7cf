//! Greedy feedback arc set.
//!
//! Eades, Lin & Smyth: repeatedly strip sinks and sources, and when neither exists remove the node
//! with the largest `out - in` weight difference, collecting its incoming edges. The collected
//! edges form a feedback arc set whose reversal makes the graph acyclic.

use crate::graphlib::{EdgeKey, Graph};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Feedback arc set treating every edge as weight 1.
pub fn greedy_fas<N, E, G>(g: &Graph<N, E, G>) -> Vec<EdgeKey>
where
    N: Default,
    E: Default,
    G: Default,
{
    greedy_fas_with_weight(g, |_| 1)
}

pub fn greedy_fas_with_weight<N, E, G>(
    g: &Graph<N, E, G>,
    weight_fn: impl Fn(&E) -> i64,
) -> Vec<EdgeKey>
where
    N: Default,
    E: Default,
    G: Default,
{
    if g.node_count() <= 1 {
        return Vec::new();
    }

    let ids: Vec<&str> = g.nodes().collect();
    let ix_of: FxHashMap<&str, usize> = ids.iter().enumerate().map(|(i, v)| (*v, i)).collect();

    // Parallel edges collapse into one weighted arc; arcs keep first-seen order.
    let mut arcs: Vec<(usize, usize, i64)> = Vec::new();
    let mut arc_index: FxHashMap<(usize, usize), usize> = FxHashMap::default();
    g.for_each_edge(|e, lbl| {
        if e.is_self_loop() {
            return;
        }
        let (Some(&v), Some(&w)) = (ix_of.get(e.v.as_str()), ix_of.get(e.w.as_str())) else {
            return;
        };
        let weight = weight_fn(lbl);
        match arc_index.get(&(v, w)) {
            Some(&i) => arcs[i].2 += weight,
            None => {
                arc_index.insert((v, w), arcs.len());
                arcs.push((v, w, weight));
            }
        }
    });

    let n = ids.len();
    let mut work = Work {
        in_w: vec![0; n],
        out_w: vec![0; n],
        in_arcs: vec![Vec::new(); n],
        out_arcs: vec![Vec::new(); n],
        alive: vec![true; n],
        stamp: vec![0; n],
        buckets: Vec::new(),
        zero_idx: 0,
    };
    for (i, &(v, w, weight)) in arcs.iter().enumerate() {
        work.out_w[v] += weight;
        work.in_w[w] += weight;
        work.out_arcs[v].push(i);
        work.in_arcs[w].push(i);
    }
    let max_out = work.out_w.iter().copied().max().unwrap_or(0).max(0);
    let max_in = work.in_w.iter().copied().max().unwrap_or(0).max(0);
    work.buckets = vec![VecDeque::new(); (max_out + max_in + 3) as usize];
    work.zero_idx = max_in + 1;
    for v in 0..n {
        work.assign_bucket(v);
    }

    let mut reversed_arcs: Vec<usize> = Vec::new();
    let mut remaining = n;
    let last = work.buckets.len() - 1;
    while remaining > 0 {
        while let Some(v) = work.pop_bucket(0) {
            work.remove(v, &arcs, None);
            remaining -= 1;
        }
        while let Some(v) = work.pop_bucket(last) {
            work.remove(v, &arcs, None);
            remaining -= 1;
        }
        if remaining == 0 {
            break;
        }
        let picked = (1..last).rev().find_map(|i| work.pop_bucket(i));
        let Some(v) = picked else {
            break;
        };
        work.remove(v, &arcs, Some(&mut reversed_arcs));
        remaining -= 1;
    }

    let mut out: Vec<EdgeKey> = Vec::new();
    for i in reversed_arcs {
        let (v, w, _) = arcs[i];
        out.extend(g.out_edges(ids[v], Some(ids[w])));
    }
    out
}

struct Work {
    in_w: Vec<i64>,
    out_w: Vec<i64>,
    in_arcs: Vec<Vec<usize>>,
    out_arcs: Vec<Vec<usize>>,
    alive: Vec<bool>,
    /// Bumped whenever a node moves bucket; bucket entries with an older stamp are stale.
    stamp: Vec<u32>,
    buckets: Vec<VecDeque<(usize, u32)>>,
    zero_idx: i64,
}

impl Work {
    fn assign_bucket(&mut self, v: usize) {
        let last = self.buckets.len() - 1;
        let idx = if self.out_w[v] == 0 {
            0
        } else if self.in_w[v] == 0 {
            last
        } else {
            (self.out_w[v] - self.in_w[v] + self.zero_idx).clamp(0, last as i64) as usize
        };
        self.stamp[v] = self.stamp[v].wrapping_add(1);
        self.buckets[idx].push_front((v, self.stamp[v]));
    }

    fn pop_bucket(&mut self, idx: usize) -> Option<usize> {
        while let Some((v, stamp)) = self.buckets[idx].pop_back() {
            if self.alive[v] && self.stamp[v] == stamp {
                return Some(v);
            }
        }
        None
    }

    fn remove(&mut self, v: usize, arcs: &[(usize, usize, i64)], collect: Option<&mut Vec<usize>>) {
        self.alive[v] = false;
        let mut collected: Vec<usize> = Vec::new();

        for &i in &self.in_arcs[v].clone() {
            let (u, _, weight) = arcs[i];
            if !self.alive[u] {
                continue;
            }
            collected.push(i);
            self.out_w[u] -= weight;
            self.assign_bucket(u);
        }
        for &i in &self.out_arcs[v].clone() {
            let (_, w, weight) = arcs[i];
            if !self.alive[w] {
                continue;
            }
            self.in_w[w] -= weight;
            self.assign_bucket(w);
        }

        if let Some(out) = collect {
            out.extend(collected);
        }
    }
}
