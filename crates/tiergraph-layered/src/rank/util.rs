use crate::LayoutGraph;
use crate::util::simplify;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RankEdge {
    pub v: usize,
    pub w: usize,
    pub minlen: i32,
    pub weight: f64,
}

/// Index-based snapshot of the simplified layout graph. Node and edge indices follow the
/// insertion order of the source graph.
#[derive(Debug, Default)]
pub(crate) struct RankGraph {
    pub ids: Vec<String>,
    pub edges: Vec<RankEdge>,
    pub out_edges: Vec<Vec<usize>>,
    pub in_edges: Vec<Vec<usize>>,
    pub edge_of: FxHashMap<(usize, usize), usize>,
}

impl RankGraph {
    pub fn from_graph(g: &LayoutGraph) -> Self {
        let simplified = simplify(g);
        let ids: Vec<String> = simplified.node_ids();
        let ix_of: FxHashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();

        let mut rg = RankGraph {
            out_edges: vec![Vec::new(); ids.len()],
            in_edges: vec![Vec::new(); ids.len()],
            ..Default::default()
        };
        simplified.for_each_edge(|e, lbl| {
            if e.is_self_loop() {
                return;
            }
            let (Some(&v), Some(&w)) = (ix_of.get(e.v.as_str()), ix_of.get(e.w.as_str())) else {
                return;
            };
            let ix = rg.edges.len();
            rg.edges.push(RankEdge {
                v,
                w,
                minlen: i32::try_from(lbl.minlen).unwrap_or(i32::MAX),
                weight: lbl.weight,
            });
            rg.out_edges[v].push(ix);
            rg.in_edges[w].push(ix);
            rg.edge_of.insert((v, w), ix);
        });
        rg.ids = ids;
        rg
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Outgoing edges first, then incoming ones.
    pub fn node_edges(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges[v]
            .iter()
            .chain(self.in_edges[v].iter())
            .copied()
    }

    pub fn slack(&self, ranks: &[i32], e: usize) -> i32 {
        let edge = self.edges[e];
        ranks[edge.w] - ranks[edge.v] - edge.minlen
    }

    pub fn write_ranks(&self, g: &mut LayoutGraph, ranks: &[i32]) {
        for (id, &rank) in self.ids.iter().zip(ranks) {
            if let Some(n) = g.node_mut(id) {
                n.rank = Some(rank);
            }
        }
    }
}

/// Ranks every node as high as its successors allow: sinks sit at 0 and each edge is drawn at
/// exactly its `minlen` below the tightest successor. Ranks come out non-positive.
pub(crate) fn longest_path_ranks(rg: &RankGraph) -> Vec<i32> {
    let n = rg.node_count();
    let mut ranks: Vec<Option<i32>> = vec![None; n];
    let mut visited = vec![false; n];

    let sources = (0..n).filter(|&v| rg.in_edges[v].is_empty());
    // Anything left unvisited after the sources sits on a cycle; start from it in node order.
    let starts: Vec<usize> = sources.chain(0..n).collect();
    for start in starts {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            if let Some(&e) = rg.out_edges[v].get(next) {
                top.1 += 1;
                let w = rg.edges[e].w;
                if !visited[w] {
                    visited[w] = true;
                    stack.push((w, 0));
                }
                continue;
            }
            let rank = rg.out_edges[v]
                .iter()
                .filter_map(|&e| {
                    let edge = rg.edges[e];
                    ranks[edge.w].map(|r| r - edge.minlen)
                })
                .min()
                .unwrap_or(0);
            ranks[v] = Some(rank);
            stack.pop();
        }
    }
    ranks.into_iter().map(|r| r.unwrap_or(0)).collect()
}

/// Assigns ranks with the longest-path heuristic only.
pub fn longest_path(g: &mut LayoutGraph) {
    let rg = RankGraph::from_graph(g);
    let ranks = longest_path_ranks(&rg);
    rg.write_ranks(g, &ranks);
}

/// `rank(w) - rank(v) - minlen` for an edge of the layout graph.
pub fn slack(g: &LayoutGraph, v: &str, w: &str, minlen: usize) -> Option<i32> {
    let rv = g.node(v)?.rank?;
    let rw = g.node(w)?.rank?;
    Some(rw - rv - i32::try_from(minlen).unwrap_or(i32::MAX))
}
