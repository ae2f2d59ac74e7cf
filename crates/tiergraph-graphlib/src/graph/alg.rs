//! Traversal helpers over [`Graph`].

use super::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Weakly connected components, each listed in breadth-first order from its first node.
pub fn components<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default,
    E: Default,
    G: Default,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in g.nodes() {
        if !seen.insert(start.to_string()) {
            continue;
        }
        let mut comp: Vec<String> = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::from([start.to_string()]);
        while let Some(v) = queue.pop_front() {
            for n in g.neighbors(&v) {
                if seen.insert(n.to_string()) {
                    queue.push_back(n.to_string());
                }
            }
            comp.push(v);
        }
        out.push(comp);
    }
    out
}

/// Strongly connected components that contain a cycle: every SCC with more than one node, plus
/// single nodes carrying a self-loop. Members are listed in node order.
pub fn find_cycles<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default,
    E: Default,
    G: Default,
{
    struct Tarjan<'a, N, E, G> {
        g: &'a Graph<N, E, G>,
        next_index: usize,
        stack: Vec<&'a str>,
        on_stack: FxHashSet<&'a str>,
        index: FxHashMap<&'a str, usize>,
        lowlink: FxHashMap<&'a str, usize>,
        sccs: Vec<Vec<&'a str>>,
    }

    impl<'a, N, E, G> Tarjan<'a, N, E, G>
    where
        N: Default,
        E: Default,
        G: Default,
    {
        fn visit(&mut self, v: &'a str) {
            self.index.insert(v, self.next_index);
            self.lowlink.insert(v, self.next_index);
            self.next_index += 1;
            self.stack.push(v);
            self.on_stack.insert(v);

            let g = self.g;
            for w in g.successors(v) {
                if !self.index.contains_key(w) {
                    self.visit(w);
                    let low = self.lowlink[v].min(self.lowlink[w]);
                    self.lowlink.insert(v, low);
                } else if self.on_stack.contains(w) {
                    let low = self.lowlink[v].min(self.index[w]);
                    self.lowlink.insert(v, low);
                }
            }

            if self.lowlink[v] == self.index[v] {
                let mut scc: Vec<&'a str> = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack.remove(w);
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }

    let mut tarjan = Tarjan {
        g,
        next_index: 0,
        stack: Vec::new(),
        on_stack: FxHashSet::default(),
        index: FxHashMap::default(),
        lowlink: FxHashMap::default(),
        sccs: Vec::new(),
    };
    for v in g.nodes() {
        if !tarjan.index.contains_key(v) {
            tarjan.visit(v);
        }
    }

    let order: FxHashMap<&str, usize> = g.nodes().enumerate().map(|(i, v)| (v, i)).collect();
    let mut cycles: Vec<Vec<String>> = tarjan
        .sccs
        .into_iter()
        .filter(|scc| scc.len() > 1 || !g.out_edges(scc[0], Some(scc[0])).is_empty())
        .map(|mut scc| {
            scc.sort_by_key(|v| order.get(v).copied().unwrap_or(usize::MAX));
            scc.into_iter().map(str::to_string).collect()
        })
        .collect();
    cycles.sort_by_key(|c| c.first().and_then(|v| order.get(v.as_str()).copied()));
    cycles
}

pub fn is_acyclic<N, E, G>(g: &Graph<N, E, G>) -> bool
where
    N: Default,
    E: Default,
    G: Default,
{
    find_cycles(g).is_empty()
}
