//! Tests for edge normalization, condition shaping, and auto-wiring.
mod common;
use common::*;
use seiri::prelude::*;
use serde_json::json;

#[test]
fn test_edge_endpoints_follow_the_remap() {
    let draft = draft_v2(
        vec![node("step one", "ai.extract"), node("b", "human.review")],
        vec![edge("step one", "b")],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    assert_eq!(normalized.payload.edges.len(), 1);
    let wired = &normalized.payload.edges[0];
    assert_eq!(wired.from, "stepone");
    assert_eq!(wired.to, "b");
}

#[test]
fn test_edge_to_remapped_duplicate_follows_the_keeper() {
    // Two nodes claimed "a"; the first kept it. An edge drawn to "a" must
    // resolve to the node that kept the id, not the suffixed duplicate.
    let draft = draft_v2(
        vec![
            node("a", "ai.extract"),
            node("a", "ai.extract"),
            node("b", "human.review"),
        ],
        vec![edge("a", "b")],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    assert_eq!(normalized.payload.edges[0].from, "a");
}

#[test]
fn test_self_loops_are_dropped() {
    let draft = draft_v2(
        vec![node("a", "ai.extract"), node("b", "human.review")],
        vec![edge("a", "a"), edge("a", "b")],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    assert_eq!(normalized.payload.edges.len(), 1);
    assert_eq!(normalized.payload.edges[0].to, "b");
    assert!(normalized.repairs.iter().any(|r| matches!(
        r,
        Repair::EdgeDropped {
            reason: EdgeDropReason::SelfLoop,
            ..
        }
    )));
}

#[test]
fn test_dangling_edges_are_dropped() {
    let draft = draft_v2(
        vec![node("a", "ai.extract")],
        vec![edge("a", "ghost"), edge("", "a")],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    assert!(normalized.payload.edges.is_empty());
}

#[test]
fn test_edge_ids_are_deduplicated() {
    let mut first = edge("a", "b");
    first.id = "link".to_string();
    let mut second = edge("b", "c");
    second.id = "link".to_string();

    let draft = draft_v2(
        vec![
            node("a", "ai.extract"),
            node("b", "human.review"),
            node("c", "human.approval"),
        ],
        vec![first, second],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    let ids: Vec<&str> = normalized
        .payload
        .edges
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, ["link", "link_2"]);
}

#[test]
fn test_blank_edge_ids_are_derived_from_endpoints() {
    let draft = draft_v2(
        vec![node("a", "ai.extract"), node("b", "human.review")],
        vec![edge("a", "b")],
    );
    let normalized = Normalizer::builder(draft).build().normalize();

    assert_eq!(normalized.payload.edges[0].id, "a_to_b");
}

#[test]
fn test_condition_shapes() {
    let cases = [
        (None, EdgeCondition::Always),
        (Some(json!({ "type": "always" })), EdgeCondition::Always),
        (
            Some(json!({ "type": "route", "equals": "approved" })),
            EdgeCondition::Route {
                equals: Some("approved".to_string()),
                any_of: vec![],
            },
        ),
        (
            Some(json!({ "type": "route", "in": ["a", "b"] })),
            EdgeCondition::Route {
                equals: None,
                any_of: vec!["a".to_string(), "b".to_string()],
            },
        ),
        (
            Some(json!({ "type": "status", "in": ["completed"] })),
            EdgeCondition::Status {
                any_of: vec!["completed".to_string()],
            },
        ),
        (
            Some(json!({ "type": "expression", "expression": "output.score > 0.5" })),
            EdgeCondition::Expression {
                expression: "output.score > 0.5".to_string(),
            },
        ),
        // Malformed conditions degrade rather than dropping the edge.
        (Some(json!({ "type": "expression", "expression": "  " })), EdgeCondition::Always),
        (Some(json!({ "type": "route" })), EdgeCondition::Always),
        (Some(json!({ "type": "status", "in": [] })), EdgeCondition::Always),
        (Some(json!({ "type": "nonsense" })), EdgeCondition::Always),
        (Some(json!("always")), EdgeCondition::Always),
        (Some(json!(42)), EdgeCondition::Always),
    ];

    for (when, expected) in cases {
        let mut drawn = edge("a", "b");
        drawn.when = when.clone();
        let draft = draft_v2(
            vec![node("a", "ai.extract"), node("b", "human.review")],
            vec![drawn],
        );
        let normalized = Normalizer::builder(draft).build().normalize();
        assert_eq!(
            normalized.payload.edges[0].when, expected,
            "when {:?}",
            when
        );
    }
}

#[test]
fn test_auto_wire_produces_a_straight_line() {
    let wired = auto_wire(&["x", "y", "z"]);

    assert_eq!(wired.entry_nodes, vec!["x".to_string()]);
    assert_eq!(wired.edges.len(), 2);
    assert_eq!(wired.edges[0].from, "x");
    assert_eq!(wired.edges[0].to, "y");
    assert_eq!(wired.edges[1].from, "y");
    assert_eq!(wired.edges[1].to, "z");
    for wired_edge in &wired.edges {
        assert_eq!(wired_edge.when, EdgeCondition::Always);
    }
}

#[test]
fn test_auto_wire_needs_two_nodes_for_edges() {
    let wired = auto_wire(&["only"]);
    assert!(wired.edges.is_empty());
    assert_eq!(wired.entry_nodes, vec!["only".to_string()]);

    let empty = auto_wire::<&str>(&[]);
    assert!(empty.edges.is_empty());
    assert!(empty.entry_nodes.is_empty());
}

#[test]
fn test_builder_auto_wires_unconnected_drafts() {
    let draft = draft_v2(
        vec![node("a", "ai.extract"), node("b", "human.review")],
        vec![],
    );
    let normalized = Normalizer::builder(draft)
        .with_auto_wire()
        .build()
        .normalize();

    assert_eq!(normalized.payload.edges.len(), 1);
    assert_eq!(normalized.payload.edges[0].from, "a");
    assert_eq!(normalized.payload.edges[0].to, "b");
    assert_eq!(normalized.payload.entry_nodes, vec!["a".to_string()]);
}

#[test]
fn test_builder_auto_wire_leaves_wired_drafts_alone() {
    let draft = draft_v2(
        vec![node("a", "ai.extract"), node("b", "human.review")],
        vec![edge("b", "a")],
    );
    let normalized = Normalizer::builder(draft)
        .with_auto_wire()
        .build()
        .normalize();

    assert_eq!(normalized.payload.edges.len(), 1);
    assert_eq!(normalized.payload.edges[0].from, "b");
}
