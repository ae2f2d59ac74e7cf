//! Label types carried by the layout graph.

use crate::graphlib::EdgeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

/// Cycle-removal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Acyclicer {
    /// Weighted greedy feedback arc set (Eades, Lin & Smyth).
    #[default]
    Greedy,
    /// Reverse the back edges of a depth-first search in node order.
    Dfs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranker {
    #[default]
    NetworkSimplex,
    LongestPath,
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    /// Gap between two real nodes of the same rank.
    pub nodesep: f64,
    /// Gap between adjacent ranks.
    pub ranksep: f64,
    /// Gap contributed by a dummy node to its neighbours in a rank.
    pub edgesep: f64,
    pub marginx: f64,
    pub marginy: f64,
    pub acyclicer: Acyclicer,
    pub ranker: Ranker,
    /// Consecutive crossing-minimization sweeps without improvement before ordering stops.
    pub order_patience: usize,
    /// Alternating coordinate-assignment sweeps.
    pub position_sweeps: usize,
    pub dummy_chains: Vec<String>,
    pub root: Option<String>,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            edgesep: 20.0,
            marginx: 0.0,
            marginy: 0.0,
            acyclicer: Acyclicer::Greedy,
            ranker: Ranker::NetworkSimplex,
            order_patience: 4,
            position_sweeps: 8,
            dummy_chains: Vec::new(),
            root: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DummyKind {
    /// One segment of a long edge.
    Edge,
    /// The temporary source that anchors tier floors.
    Root,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    /// Center coordinates, filled in by the pipeline.
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    /// Lowest rank the node may occupy, counted from the first rank below the root.
    pub tier: Option<i32>,
    pub dummy: Option<DummyKind>,
    pub edge_label: Option<EdgeLabel>,
    pub edge_obj: Option<EdgeKey>,
}

impl NodeLabel {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_tier(mut self, tier: i32) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn is_dummy(&self) -> bool {
        self.dummy.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub minlen: usize,
    pub weight: f64,
    pub reversed: bool,
    pub forward_name: Option<String>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
            forward_name: None,
        }
    }
}

impl EdgeLabel {
    pub fn new(weight: f64, minlen: usize) -> Self {
        Self {
            minlen,
            weight,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
