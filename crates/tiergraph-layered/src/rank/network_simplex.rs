//! Network simplex ranking.
//!
//! Gansner, Koutsofios, North & Vo, "A Technique for Drawing Directed Graphs" (1993). Starting
//! from a feasible tight tree, tree edges with a negative cut value are exchanged for the non-tree
//! edge of least slack that reconnects the two halves, until every cut value is non-negative.
//! The result minimises `sum(weight * (rank(w) - rank(v)))` subject to `minlen`.

use super::feasible_tree::{TightTree, feasible_tree};
use super::util::{RankGraph, longest_path_ranks};
use crate::LayoutGraph;

/// Upper bound on exchanges, as a multiple of the edge count.
const EXCHANGES_PER_EDGE: usize = 16;

pub fn network_simplex(g: &mut LayoutGraph) {
    let rg = RankGraph::from_graph(g);
    if rg.node_count() == 0 {
        return;
    }
    let ranks = solve(&rg);
    rg.write_ranks(g, &ranks);
}

pub(crate) fn solve(rg: &RankGraph) -> Vec<i32> {
    let mut ranks = longest_path_ranks(rg);
    let tree = feasible_tree(rg, &mut ranks);
    let n = rg.node_count();
    let mut simplex = Simplex {
        rg,
        tree,
        ranks,
        parent: vec![None; n],
        low: vec![0; n],
        lim: vec![0; n],
        cut: vec![0.0; n],
        preorder: Vec::with_capacity(n),
    };
    simplex.init_low_lim();
    simplex.init_cut_values();

    let max_exchanges = rg.edges.len().saturating_mul(EXCHANGES_PER_EDGE).max(64);
    let mut exchanges = 0usize;
    while let Some((child, parent)) = simplex.leave_edge() {
        if exchanges >= max_exchanges {
            tracing::debug!(exchanges, "network simplex: exchange limit reached");
            break;
        }
        let Some(enter) = simplex.enter_edge(child, parent) else {
            break;
        };
        simplex.exchange(child, parent, enter);
        exchanges += 1;
    }
    tracing::trace!(
        nodes = n,
        edges = rg.edges.len(),
        exchanges,
        "network simplex: done"
    );
    simplex.ranks
}

struct Simplex<'a> {
    rg: &'a RankGraph,
    tree: TightTree,
    ranks: Vec<i32>,
    parent: Vec<Option<usize>>,
    low: Vec<usize>,
    lim: Vec<usize>,
    /// Cut value of the tree edge between a node and its parent.
    cut: Vec<f64>,
    preorder: Vec<usize>,
}

impl Simplex<'_> {
    /// Postorder numbering: `lim` is the visit number, `low` the smallest `lim` in the subtree.
    fn init_low_lim(&mut self) {
        self.preorder.clear();
        let mut next_lim = 1usize;
        let roots = self.tree.roots.clone();
        for root in roots {
            self.parent[root] = None;
            self.low[root] = next_lim;
            self.preorder.push(root);
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            while let Some(top) = stack.last_mut() {
                let (v, next) = *top;
                if let Some(&w) = self.tree.adj[v].get(next) {
                    top.1 += 1;
                    if Some(w) == self.parent[v] {
                        continue;
                    }
                    self.parent[w] = Some(v);
                    self.low[w] = next_lim;
                    self.preorder.push(w);
                    stack.push((w, 0));
                    continue;
                }
                self.lim[v] = next_lim;
                next_lim += 1;
                stack.pop();
            }
        }
    }

    fn init_cut_values(&mut self) {
        // Children before parents: reverse preorder visits every subtree before its root.
        let order: Vec<usize> = self.preorder.iter().rev().copied().collect();
        for v in order {
            if self.parent[v].is_some() {
                self.cut[v] = self.calc_cut_value(v);
            }
        }
    }

    fn calc_cut_value(&self, child: usize) -> f64 {
        let Some(parent) = self.parent[child] else {
            return 0.0;
        };
        let rg = self.rg;
        let (child_is_tail, tree_edge) = match rg.edge_of.get(&(child, parent)) {
            Some(&e) => (true, e),
            None => match rg.edge_of.get(&(parent, child)) {
                Some(&e) => (false, e),
                None => return 0.0,
            },
        };

        let mut cut = rg.edges[tree_edge].weight;
        for e in rg.node_edges(child) {
            let edge = rg.edges[e];
            let is_out = edge.v == child;
            let other = if is_out { edge.w } else { edge.v };
            if other == parent {
                continue;
            }
            let points_to_head = is_out == child_is_tail;
            cut += if points_to_head {
                edge.weight
            } else {
                -edge.weight
            };
            if self.parent[other] == Some(child) {
                let other_cut = self.cut[other];
                cut += if points_to_head { -other_cut } else { other_cut };
            }
        }
        cut
    }

    /// First node, in node order, whose tree edge to its parent has a negative cut value.
    fn leave_edge(&self) -> Option<(usize, usize)> {
        (0..self.rg.node_count()).find_map(|v| {
            let parent = self.parent[v]?;
            (self.cut[v] < 0.0).then_some((v, parent))
        })
    }

    fn is_descendant(&self, v: usize, root: usize) -> bool {
        self.low[root] <= self.lim[v] && self.lim[v] <= self.lim[root]
    }

    /// The non-tree edge of least slack that crosses the cut opened by removing the tree edge.
    fn enter_edge(&self, child: usize, parent: usize) -> Option<usize> {
        let rg = self.rg;
        let (v, w) = if rg.edge_of.contains_key(&(child, parent)) {
            (child, parent)
        } else {
            (parent, child)
        };
        let (tail, flip) = if self.lim[v] > self.lim[w] {
            (w, true)
        } else {
            (v, false)
        };

        (0..rg.edges.len())
            .filter(|&e| {
                let edge = rg.edges[e];
                flip == self.is_descendant(edge.v, tail) && flip != self.is_descendant(edge.w, tail)
            })
            .min_by_key(|&e| rg.slack(&self.ranks, e))
    }

    fn exchange(&mut self, child: usize, parent: usize, enter: usize) {
        let edge = self.rg.edges[enter];
        self.tree.remove_edge(child, parent);
        self.tree.add_edge(edge.v, edge.w);
        self.init_low_lim();
        self.init_cut_values();
        self.update_ranks();
    }

    /// Re-derives ranks top-down so every tree edge is tight again.
    fn update_ranks(&mut self) {
        let rg = self.rg;
        for i in 0..self.preorder.len() {
            let v = self.preorder[i];
            let Some(parent) = self.parent[v] else {
                continue;
            };
            if let Some(&e) = rg.edge_of.get(&(v, parent)) {
                self.ranks[v] = self.ranks[parent] - rg.edges[e].minlen;
            } else if let Some(&e) = rg.edge_of.get(&(parent, v)) {
                self.ranks[v] = self.ranks[parent] + rg.edges[e].minlen;
            }
        }
    }
}
