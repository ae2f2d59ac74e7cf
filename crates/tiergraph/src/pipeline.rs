//! One-shot recomputation: assemble, lay out, classify.

use crate::assemble::assemble_with_report;
use crate::classify::classify_with;
use crate::config::LayoutConfig;
use crate::layout::{LayeredLayout, NetworkSimplexLayout, layout_with};
use crate::model::{
    Bounds, CategoryNode, GraphEdge, LayoutedDiagram, LeafNode, PositionedNode, RelationshipEdge,
    SubcategoryNode,
};
use crate::{AssemblyReport, Error, Result};
use serde::{Deserialize, Serialize};

/// The six raw input collections. Every key is optional when reading JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramInput {
    #[serde(default)]
    pub graph_nodes: Vec<LeafNode>,
    #[serde(default)]
    pub graph_edges: Vec<GraphEdge>,
    #[serde(default, rename = "c1Output")]
    pub c1_output: Vec<CategoryNode>,
    #[serde(default, rename = "c2Subcategories")]
    pub c2_subcategories: Vec<SubcategoryNode>,
    #[serde(default, rename = "c2Relationships")]
    pub c2_relationships: Vec<RelationshipEdge>,
    #[serde(default, rename = "crossC1C2Relationships")]
    pub cross_c1_c2_relationships: Vec<RelationshipEdge>,
}

impl DiagramInput {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

pub fn layout_diagram(input: &DiagramInput, config: &LayoutConfig) -> Result<LayoutedDiagram> {
    layout_diagram_with(input, config, &NetworkSimplexLayout).map(|(diagram, _)| diagram)
}

/// Like [`layout_diagram`], with an explicit strategy and the assembly report.
pub fn layout_diagram_with(
    input: &DiagramInput,
    config: &LayoutConfig,
    strategy: &dyn LayeredLayout,
) -> Result<(LayoutedDiagram, AssemblyReport)> {
    let (graph, report) = assemble_with_report(
        &input.graph_nodes,
        &input.graph_edges,
        &input.c1_output,
        &input.c2_subcategories,
        &input.c2_relationships,
        &input.cross_c1_c2_relationships,
    );
    let boxes = layout_with(&graph.nodes, &graph.edges, config, strategy)?;
    let edges = classify_with(&graph.edges, &config.classifier);

    let bounds = Bounds::from_boxes(boxes.values());
    let mut nodes: Vec<PositionedNode> = Vec::with_capacity(graph.nodes.len());
    for node in graph.nodes {
        // Nodes sharing an id share its box.
        let Some(&bx) = boxes.get(node.id()) else {
            return Err(Error::MissingPosition {
                node_id: node.id().to_string(),
            });
        };
        nodes.push(PositionedNode::new(node, bx));
    }
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "layout_diagram: done"
    );

    Ok((
        LayoutedDiagram {
            nodes,
            edges,
            bounds,
        },
        report,
    ))
}
