//! Graph assembly.
//!
//! Merges leaves, categories and subcategories into one node list and derives one edge list from
//! explicit leaf edges, containment and the two relationship kinds. Links that point at nothing
//! are dropped; `assemble_with_report` says which.

use crate::config::CONTAINMENT_LABEL;
use crate::model::{
    AssembledGraph, CategoryNode, GraphEdge, GraphNode, LeafNode, RelationshipEdge,
    SubcategoryNode,
};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum DroppedLink {
    /// A relationship endpoint names no subcategory.
    #[serde(rename_all = "camelCase")]
    UnresolvedRelationship {
        relationship_id: String,
        from_name: String,
        to_name: String,
    },
    /// A subcategory's parent category does not exist.
    #[serde(rename_all = "camelCase")]
    UnknownCategory {
        subcategory_id: String,
        category_id: String,
    },
    /// A subcategory lists a member leaf that does not exist.
    #[serde(rename_all = "camelCase")]
    UnknownMember {
        subcategory_id: String,
        leaf_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub dropped: Vec<DroppedLink>,
}

impl AssemblyReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    fn drop_link(&mut self, link: DroppedLink) {
        tracing::debug!(?link, "assemble: dropped link");
        self.dropped.push(link);
    }
}

pub fn assemble(
    leaves: &[LeafNode],
    leaf_edges: &[GraphEdge],
    categories: &[CategoryNode],
    subcategories: &[SubcategoryNode],
    same_tier: &[RelationshipEdge],
    cross_tier: &[RelationshipEdge],
) -> AssembledGraph {
    assemble_with_report(
        leaves,
        leaf_edges,
        categories,
        subcategories,
        same_tier,
        cross_tier,
    )
    .0
}

pub fn assemble_with_report(
    leaves: &[LeafNode],
    leaf_edges: &[GraphEdge],
    categories: &[CategoryNode],
    subcategories: &[SubcategoryNode],
    same_tier: &[RelationshipEdge],
    cross_tier: &[RelationshipEdge],
) -> (AssembledGraph, AssemblyReport) {
    let mut report = AssemblyReport::default();

    // Later subcategories win on duplicate names.
    let id_by_name: IndexMap<&str, &str> = subcategories
        .iter()
        .map(|s| (s.name.as_str(), s.id.as_str()))
        .collect();
    let category_ids: IndexSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let leaf_ids: IndexSet<&str> = leaves.iter().map(|l| l.id.as_str()).collect();

    let mut edges: Vec<GraphEdge> = leaf_edges.to_vec();

    for sub in subcategories {
        if category_ids.contains(sub.c1_category_id.as_str()) {
            edges.push(GraphEdge::new(
                format!("c1-{}-to-c2-{}", sub.c1_category_id, sub.id),
                sub.c1_category_id.clone(),
                sub.id.clone(),
                CONTAINMENT_LABEL,
            ));
        } else {
            report.drop_link(DroppedLink::UnknownCategory {
                subcategory_id: sub.id.clone(),
                category_id: sub.c1_category_id.clone(),
            });
        }
    }

    for sub in subcategories {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for leaf in &sub.member_leaf_ids {
            if !seen.insert(leaf.as_str()) {
                continue;
            }
            if !leaf_ids.contains(leaf.as_str()) {
                report.drop_link(DroppedLink::UnknownMember {
                    subcategory_id: sub.id.clone(),
                    leaf_id: leaf.clone(),
                });
                continue;
            }
            edges.push(GraphEdge::new(
                format!("c2-{}-to-node-{}", sub.id, leaf),
                sub.id.clone(),
                leaf.clone(),
                CONTAINMENT_LABEL,
            ));
        }
    }

    for rel in same_tier.iter().chain(cross_tier) {
        let source = id_by_name.get(rel.from_name.as_str());
        let target = id_by_name.get(rel.to_name.as_str());
        let (Some(source), Some(target)) = (source, target) else {
            report.drop_link(DroppedLink::UnresolvedRelationship {
                relationship_id: rel.id.clone(),
                from_name: rel.from_name.clone(),
                to_name: rel.to_name.clone(),
            });
            continue;
        };
        edges.push(GraphEdge::new(
            rel.id.clone(),
            *source,
            *target,
            rel.label.clone(),
        ));
    }

    let nodes: Vec<GraphNode> = leaves
        .iter()
        .cloned()
        .map(GraphNode::Leaf)
        .chain(categories.iter().cloned().map(GraphNode::Category))
        .chain(subcategories.iter().cloned().map(GraphNode::Subcategory))
        .collect();

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        dropped = report.dropped.len(),
        "assemble: done"
    );
    (AssembledGraph { nodes, edges }, report)
}
