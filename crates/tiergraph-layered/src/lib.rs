#![forbid(unsafe_code)]

//! Layered graph layout.
//!
//! The pipeline follows the classic Sugiyama phases: cycle removal, rank assignment (network
//! simplex over tier floors), long-edge normalization, crossing minimization and coordinate
//! assignment. Every phase iterates in node/edge insertion order, so identical input always
//! yields identical coordinates.

pub use tiergraph_graphlib as graphlib;

pub mod acyclic;
pub mod coordinate_system;
pub mod greedy_fas;
pub mod model;
pub mod normalize;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod tier_floor;
pub mod util;

pub use model::{Acyclicer, DummyKind, EdgeLabel, GraphLabel, NodeLabel, Point, RankDir, Ranker};
pub use pipeline::{layout, node_centers};

/// The graph type every phase of the pipeline operates on.
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;
