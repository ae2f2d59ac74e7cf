#![forbid(unsafe_code)]

//! Categorized entity-graph diagrams.
//!
//! Leaves, tier-1 categories and tier-2 subcategories are merged into one graph
//! ([`assemble`]), placed in tier-ranked bands with label-sized boxes ([`layout`]) and their
//! edges tagged with a category and bidirectional pairing ([`classify`]). [`layout_diagram`] runs
//! all three on a [`DiagramInput`].

pub mod assemble;
pub mod classify;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;

pub use assemble::{AssemblyReport, DroppedLink, assemble, assemble_with_report};
pub use classify::{classify, classify_with};
pub use config::{
    BoxSizing, ClassifierConfig, EdgeWeighting, LayoutConfig, RankDirection, CONTAINMENT_LABEL,
    CROSS_TIER_PREFIX, SAME_TIER_PREFIX,
};
pub use error::{Error, Result};
pub use layout::{
    LayeredLayout, NetworkSimplexLayout, SolverEdge, SolverNode, layout, layout_with,
};
pub use model::{
    AssembledGraph, Bounds, CategoryNode, ClassifiedEdge, Direction, EdgeCategory, GraphEdge,
    GraphNode, LayoutedDiagram, LeafNode, NodeBox, NodeKind, Position, PositionedNode,
    RelationshipEdge, Size, SubcategoryNode,
};
pub use pipeline::{DiagramInput, layout_diagram, layout_diagram_with};
pub use tiergraph_layered::Point;
