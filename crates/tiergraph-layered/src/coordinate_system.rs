//! Rank-direction transforms.
//!
//! Positioning always works top-to-bottom. `adjust` swaps box axes for horizontal layouts before
//! positioning; `undo` mirrors and swaps the finished coordinates into the requested direction.

use crate::{LayoutGraph, RankDir};

pub fn adjust(g: &mut LayoutGraph) {
    if is_horizontal(g.graph().rankdir) {
        swap_width_height(g);
    }
}

pub fn undo(g: &mut LayoutGraph) {
    let rankdir = g.graph().rankdir;
    if matches!(rankdir, RankDir::BT | RankDir::RL) {
        g.for_each_node_mut(|_id, n| {
            n.y = n.y.map(|y| -y);
        });
    }
    if is_horizontal(rankdir) {
        g.for_each_node_mut(|_id, n| {
            (n.x, n.y) = (n.y, n.x);
        });
        swap_width_height(g);
    }
}

fn is_horizontal(rankdir: RankDir) -> bool {
    matches!(rankdir, RankDir::LR | RankDir::RL)
}

fn swap_width_height(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_id, n| {
        (n.width, n.height) = (n.height, n.width);
    });
}
