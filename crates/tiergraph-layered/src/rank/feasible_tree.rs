//! Feasible tight spanning tree.
//!
//! Grows a tree of tight edges (slack 0) from the first node. When the tree stops growing, the
//! incident edge with the least slack is made tight by shifting the whole tree, and growth
//! resumes. Components that share no edge with the tree start a tree of their own.

use super::util::RankGraph;

#[derive(Debug, Clone, Default)]
pub(crate) struct TightTree {
    /// Tree neighbours per node, in the order the tree edges were added.
    pub adj: Vec<Vec<usize>>,
    /// First node of each component.
    pub roots: Vec<usize>,
}

impl TightTree {
    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.adj[a].push(b);
        self.adj[b].push(a);
    }

    pub fn remove_edge(&mut self, a: usize, b: usize) {
        self.adj[a].retain(|&x| x != b);
        self.adj[b].retain(|&x| x != a);
    }
}

pub(crate) fn feasible_tree(rg: &RankGraph, ranks: &mut [i32]) -> TightTree {
    let n = rg.node_count();
    let mut tree = TightTree {
        adj: vec![Vec::new(); n],
        roots: Vec::new(),
    };
    let mut in_tree = vec![false; n];
    let mut members: Vec<usize> = Vec::with_capacity(n);

    while members.len() < n {
        let Some(root) = (0..n).find(|&v| !in_tree[v]) else {
            break;
        };
        let component_start = members.len();
        in_tree[root] = true;
        members.push(root);
        tree.roots.push(root);

        loop {
            grow_tight(rg, ranks, &mut tree, &mut in_tree, &mut members);
            if members.len() == n {
                break;
            }
            let Some(e) = min_slack_edge(rg, ranks, &in_tree) else {
                break;
            };
            let slack = rg.slack(ranks, e);
            let delta = if in_tree[rg.edges[e].v] { slack } else { -slack };
            for &v in &members[component_start..] {
                ranks[v] += delta;
            }
        }
    }
    tree
}

/// Depth-first walk from every tree member, pulling in nodes reachable through tight edges.
fn grow_tight(
    rg: &RankGraph,
    ranks: &[i32],
    tree: &mut TightTree,
    in_tree: &mut [bool],
    members: &mut Vec<usize>,
) {
    let mut i = 0;
    while i < members.len() {
        let mut stack: Vec<(usize, Vec<usize>, usize)> = Vec::new();
        let start = members[i];
        stack.push((start, rg.node_edges(start).collect(), 0));
        while let Some((v, edges, next)) = stack.last_mut() {
            let v = *v;
            let Some(&e) = edges.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;
            let edge = rg.edges[e];
            let w = if edge.v == v { edge.w } else { edge.v };
            if in_tree[w] || rg.slack(ranks, e) != 0 {
                continue;
            }
            in_tree[w] = true;
            members.push(w);
            tree.add_edge(v, w);
            stack.push((w, rg.node_edges(w).collect(), 0));
        }
        i += 1;
    }
}

/// The edge with exactly one endpoint in the tree and the smallest slack; ties go to the edge
/// inserted first.
fn min_slack_edge(rg: &RankGraph, ranks: &[i32], in_tree: &[bool]) -> Option<usize> {
    (0..rg.edges.len())
        .filter(|&e| in_tree[rg.edges[e].v] != in_tree[rg.edges[e].w])
        .min_by_key(|&e| rg.slack(ranks, e))
}
