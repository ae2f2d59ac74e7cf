//! Input and output records.
//!
//! Field names serialize in camelCase. Subcategory and relationship fields also accept the
//! legacy keys (`c2Name`, `nodeIds`, `fromC2`, `toC2`) when reading.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// A tier-1 category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// A tier-2 subcategory. `name` is the key relationships refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub c1_category_id: String,
    #[serde(default, alias = "c2Name")]
    pub name: String,
    /// Missing, `null` and non-array values all read as "no members"; non-string entries are
    /// skipped.
    #[serde(default, alias = "nodeIds", deserialize_with = "lenient_ids")]
    pub member_leaf_ids: Vec<String>,
}

fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// A relationship between two subcategories, addressed by subcategory name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEdge {
    pub id: String,
    #[serde(alias = "fromC2")]
    pub from_name: String,
    #[serde(alias = "toC2")]
    pub to_name: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Category,
    Subcategory,
    Leaf,
}

impl NodeKind {
    /// The band a node of this kind is placed in at the earliest.
    pub fn tier(self) -> i32 {
        match self {
            NodeKind::Category => 0,
            NodeKind::Subcategory => 1,
            NodeKind::Leaf => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GraphNode {
    Category(CategoryNode),
    Subcategory(SubcategoryNode),
    Leaf(LeafNode),
}

impl GraphNode {
    pub fn id(&self) -> &str {
        match self {
            GraphNode::Category(n) => &n.id,
            GraphNode::Subcategory(n) => &n.id,
            GraphNode::Leaf(n) => &n.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GraphNode::Category(n) => &n.label,
            GraphNode::Subcategory(n) => &n.label,
            GraphNode::Leaf(n) => &n.label,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            GraphNode::Category(_) => NodeKind::Category,
            GraphNode::Subcategory(_) => NodeKind::Subcategory,
            GraphNode::Leaf(_) => NodeKind::Leaf,
        }
    }
}

/// Nodes and edges merged from every input collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembledGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Top-left anchor and size of a laid-out node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeBox {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &NodeBox) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub position: Position,
    pub size: Size,
}

impl PositionedNode {
    pub fn new(node: GraphNode, bx: NodeBox) -> Self {
        Self {
            node,
            position: Position { x: bx.x, y: bx.y },
            size: Size {
                width: bx.width,
                height: bx.height,
            },
        }
    }

    pub fn node_box(&self) -> NodeBox {
        NodeBox {
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeCategory {
    Containment,
    SameTier,
    CrossTier,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub category: EdgeCategory,
    pub bidirectional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional_pair_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The smallest box covering every given box; `None` when there is none.
    pub fn from_boxes<'a>(boxes: impl IntoIterator<Item = &'a NodeBox>) -> Option<Self> {
        let mut it = boxes.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.right(),
            max_y: first.bottom(),
        };
        for bx in it {
            b.min_x = b.min_x.min(bx.x);
            b.min_y = b.min_y.min(bx.y);
            b.max_x = b.max_x.max(bx.right());
            b.max_y = b.max_y.max(bx.bottom());
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutedDiagram {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<ClassifiedEdge>,
    pub bounds: Option<Bounds>,
}

impl LayoutedDiagram {
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.node.id() == id)
    }

    pub fn edge(&self, id: &str) -> Option<&ClassifiedEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
