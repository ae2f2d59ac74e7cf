//! Rank assignment.
//!
//! Ranks are solved on a simplified, index-based copy of the layout graph (parallel edges merged,
//! self-loops dropped) and written back to the node labels. The graph must be acyclic.

mod feasible_tree;
mod network_simplex;
pub mod util;

pub use network_simplex::network_simplex;
pub use util::{longest_path, slack};

use crate::{LayoutGraph, Ranker};

pub fn rank(g: &mut LayoutGraph) {
    match g.graph().ranker {
        Ranker::NetworkSimplex => network_simplex(g),
        Ranker::LongestPath => longest_path(g),
    }
}
