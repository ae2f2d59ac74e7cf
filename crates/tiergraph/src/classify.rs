//! Edge classification.
//!
//! Edges are grouped by unordered endpoint pair. A pair with more than one edge is bidirectional:
//! its first edge in input order is `forward`, the rest `backward`. Classification never looks at
//! positions.

use crate::config::ClassifierConfig;
use crate::model::{ClassifiedEdge, Direction, EdgeCategory, GraphEdge};
use indexmap::IndexMap;

pub fn classify(edges: &[GraphEdge]) -> Vec<ClassifiedEdge> {
    classify_with(edges, &ClassifierConfig::default())
}

pub fn classify_with(edges: &[GraphEdge], config: &ClassifierConfig) -> Vec<ClassifiedEdge> {
    let mut groups: IndexMap<(&str, &str), usize> = IndexMap::new();
    let mut rank_in_group: Vec<usize> = Vec::with_capacity(edges.len());
    for e in edges {
        let count = groups.entry(pair_key(e)).or_insert(0);
        rank_in_group.push(*count);
        *count += 1;
    }

    edges
        .iter()
        .zip(rank_in_group)
        .map(|(e, rank)| {
            let key = pair_key(e);
            let bidirectional = groups.get(&key).is_some_and(|&size| size > 1);
            let (pair_id, direction) = if bidirectional {
                let direction = if rank == 0 {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                (Some(format!("{}-{}", key.0, key.1)), Some(direction))
            } else {
                (None, None)
            };
            ClassifiedEdge {
                id: e.id.clone(),
                source: e.source.clone(),
                target: e.target.clone(),
                label: e.label.clone(),
                category: category(e, config),
                bidirectional,
                bidirectional_pair_id: pair_id,
                direction,
            }
        })
        .collect()
}

fn pair_key(e: &GraphEdge) -> (&str, &str) {
    let (a, b) = (e.source.as_str(), e.target.as_str());
    if a <= b { (a, b) } else { (b, a) }
}

pub fn category(e: &GraphEdge, config: &ClassifierConfig) -> EdgeCategory {
    if e.label == config.containment_label {
        EdgeCategory::Containment
    } else if e.id.starts_with(&config.same_tier_prefix) {
        EdgeCategory::SameTier
    } else if e.id.starts_with(&config.cross_tier_prefix) {
        EdgeCategory::CrossTier
    } else {
        EdgeCategory::Plain
    }
}
