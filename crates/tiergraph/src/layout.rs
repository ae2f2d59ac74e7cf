//! Node placement.
//!
//! Every node gets a tier from its kind and a box from its label; the boxes and the weighted
//! edges go to a [`LayeredLayout`] strategy, and the centers it returns become top-left anchors.

use crate::config::{LayoutConfig, RankDirection};
use crate::model::{GraphEdge, GraphNode, NodeBox};
use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use tiergraph_layered::graphlib::{Graph, GraphOptions};
use tiergraph_layered::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, Point, RankDir};

/// A node as the layered solver sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverNode {
    pub id: String,
    /// The earliest band the node may occupy.
    pub tier: i32,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolverEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub minlen: usize,
}

/// A layered placement algorithm: ranked, sized nodes and weighted edges in, box centers out.
pub trait LayeredLayout {
    fn centers(
        &self,
        nodes: &[SolverNode],
        edges: &[SolverEdge],
        config: &LayoutConfig,
    ) -> IndexMap<String, Point>;
}

/// Network-simplex ranking, barycenter ordering and least-squares coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkSimplexLayout;

impl LayeredLayout for NetworkSimplexLayout {
    fn centers(
        &self,
        nodes: &[SolverNode],
        edges: &[SolverEdge],
        config: &LayoutConfig,
    ) -> IndexMap<String, Point> {
        let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
        g.set_graph(GraphLabel {
            rankdir: match config.rankdir {
                RankDirection::TB => RankDir::TB,
                RankDirection::BT => RankDir::BT,
                RankDirection::LR => RankDir::LR,
                RankDirection::RL => RankDir::RL,
            },
            nodesep: config.nodesep,
            edgesep: config.edgesep,
            ranksep: config.ranksep,
            marginx: config.marginx,
            marginy: config.marginy,
            ..Default::default()
        });
        for n in nodes {
            g.set_node(
                n.id.clone(),
                NodeLabel::sized(n.width, n.height).with_tier(n.tier),
            );
        }
        for e in edges {
            g.set_edge_named(
                e.source.clone(),
                e.target.clone(),
                Some(e.id.clone()),
                Some(EdgeLabel::new(e.weight, e.minlen)),
            );
        }

        tiergraph_layered::layout(&mut g);
        tiergraph_layered::node_centers(&g).into_iter().collect()
    }
}

/// Lays out with the default configuration and strategy.
pub fn layout(nodes: &[GraphNode], edges: &[GraphEdge]) -> Result<IndexMap<String, NodeBox>> {
    layout_with(nodes, edges, &LayoutConfig::default(), &NetworkSimplexLayout)
}

/// Returns one box per node, keyed and ordered by node.
///
/// Fails with [`Error::MissingNode`] before any placement when an edge endpoint is not a node,
/// and with [`Error::MissingPosition`] when the strategy leaves a node out.
pub fn layout_with(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &LayoutConfig,
    strategy: &dyn LayeredLayout,
) -> Result<IndexMap<String, NodeBox>> {
    let known: IndexSet<&str> = nodes.iter().map(GraphNode::id).collect();
    for e in edges {
        for endpoint in [&e.source, &e.target] {
            if !known.contains(endpoint.as_str()) {
                return Err(Error::MissingNode {
                    edge_id: e.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
    }

    let solver_nodes: Vec<SolverNode> = nodes.iter().map(|n| solver_node(n, config)).collect();
    let solver_edges: Vec<SolverEdge> = edges
        .iter()
        .map(|e| {
            let weighting = config.weighting(&e.label);
            SolverEdge {
                id: e.id.clone(),
                source: e.source.clone(),
                target: e.target.clone(),
                weight: weighting.weight,
                minlen: weighting.minlen,
            }
        })
        .collect();
    tracing::debug!(
        nodes = solver_nodes.len(),
        edges = solver_edges.len(),
        "layout: placing"
    );

    let centers = strategy.centers(&solver_nodes, &solver_edges, config);

    let mut boxes: IndexMap<String, NodeBox> = IndexMap::with_capacity(solver_nodes.len());
    for n in solver_nodes {
        let Some(center) = centers.get(&n.id) else {
            return Err(Error::MissingPosition { node_id: n.id });
        };
        boxes.insert(
            n.id,
            NodeBox {
                x: center.x - n.width / 2.0,
                y: center.y - n.height / 2.0,
                width: n.width,
                height: n.height,
            },
        );
    }
    Ok(boxes)
}

pub fn solver_node(node: &GraphNode, config: &LayoutConfig) -> SolverNode {
    let kind = node.kind();
    let (width, height) = config.sizing(kind).size(node.label());
    SolverNode {
        id: node.id().to_string(),
        tier: kind.tier(),
        width,
        height,
    }
}
