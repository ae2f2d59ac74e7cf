use tiergraph::{
    ClassifiedEdge, ClassifierConfig, Direction, EdgeCategory, GraphEdge, classify, classify_with,
};

fn by_id<'a>(edges: &'a [ClassifiedEdge], id: &str) -> &'a ClassifiedEdge {
    edges
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("no edge {id}"))
}

#[test]
fn opposing_edges_pair_up() {
    let out = classify(&[
        GraphEdge::new("pay", "orders", "billing", "pays"),
        GraphEdge::new("ship", "billing", "orders", "ships"),
    ]);

    let pay = by_id(&out, "pay");
    let ship = by_id(&out, "ship");
    assert!(pay.bidirectional && ship.bidirectional);
    assert_eq!(pay.bidirectional_pair_id.as_deref(), Some("billing-orders"));
    assert_eq!(ship.bidirectional_pair_id, pay.bidirectional_pair_id);
    assert_eq!(pay.direction, Some(Direction::Forward));
    assert_eq!(ship.direction, Some(Direction::Backward));
}

#[test]
fn lone_edge_is_not_bidirectional() {
    let out = classify(&[GraphEdge::new("e1", "a", "b", "")]);

    assert_eq!(
        out,
        vec![ClassifiedEdge {
            id: "e1".to_string(),
            source: "a".to_string(),
            target: "b".to_string(),
            label: String::new(),
            category: EdgeCategory::Plain,
            bidirectional: false,
            bidirectional_pair_id: None,
            direction: None,
        }]
    );
}

#[test]
fn later_members_of_a_group_are_backward() {
    let out = classify(&[
        GraphEdge::new("e1", "b", "a", ""),
        GraphEdge::new("x", "c", "d", ""),
        GraphEdge::new("e2", "a", "b", ""),
        GraphEdge::new("e3", "b", "a", ""),
    ]);

    let dirs: Vec<Option<Direction>> = out.iter().map(|e| e.direction).collect();
    assert_eq!(
        dirs,
        vec![
            Some(Direction::Forward),
            None,
            Some(Direction::Backward),
            Some(Direction::Backward),
        ]
    );
    assert!(out.iter().filter(|e| e.id != "x").all(|e| e.bidirectional));
}

#[test]
fn output_keeps_input_order() {
    let edges = [
        GraphEdge::new("z", "a", "b", ""),
        GraphEdge::new("y", "b", "c", ""),
        GraphEdge::new("x", "c", "a", ""),
    ];
    let ids: Vec<String> = classify(&edges).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["z", "y", "x"]);
}

#[test]
fn categories_come_from_label_and_id_prefix() {
    let out = classify(&[
        GraphEdge::new("c1-C-to-c2-S", "C", "S", "contains"),
        GraphEdge::new("c2_relationship_1", "S", "T", "uses"),
        GraphEdge::new("cross_c1_c2_rel_1", "T", "U", "uses"),
        GraphEdge::new("e1", "L1", "L2", "calls"),
        GraphEdge::new("c2_relationship_2", "S", "U", "contains"),
    ]);

    let cats: Vec<EdgeCategory> = out.iter().map(|e| e.category).collect();
    assert_eq!(
        cats,
        vec![
            EdgeCategory::Containment,
            EdgeCategory::SameTier,
            EdgeCategory::CrossTier,
            EdgeCategory::Plain,
            EdgeCategory::Containment,
        ]
    );
}

#[test]
fn custom_prefixes_drive_categories() {
    let config = ClassifierConfig {
        same_tier_prefix: "peer_".to_string(),
        cross_tier_prefix: "up_".to_string(),
        containment_label: "has".to_string(),
    };
    let out = classify_with(
        &[
            GraphEdge::new("peer_1", "a", "b", ""),
            GraphEdge::new("up_1", "b", "c", ""),
            GraphEdge::new("k", "c", "d", "has"),
            GraphEdge::new("c2_relationship_1", "d", "e", "contains"),
        ],
        &config,
    );

    let cats: Vec<EdgeCategory> = out.iter().map(|e| e.category).collect();
    assert_eq!(
        cats,
        vec![
            EdgeCategory::SameTier,
            EdgeCategory::CrossTier,
            EdgeCategory::Containment,
            EdgeCategory::Plain,
        ]
    );
}

#[test]
fn classification_serializes_in_camel_case() {
    let out = classify(&[
        GraphEdge::new("c2_relationship_1", "a", "b", ""),
        GraphEdge::new("c2_relationship_2", "b", "a", ""),
    ]);
    let v = serde_json::to_value(&out).unwrap();

    assert_eq!(v[0]["category"], "same-tier");
    assert_eq!(v[0]["bidirectionalPairId"], "a-b");
    assert_eq!(v[1]["direction"], "backward");
}
