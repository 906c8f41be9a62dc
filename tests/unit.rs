//! Unit tests for the smaller seiri pieces: serde shapes, guards, guidance.
mod common;
use seiri::prelude::*;
use serde_json::json;

#[test]
fn test_schema_version_serde() {
    assert_eq!(SchemaVersion::from(1), SchemaVersion::V1);
    assert_eq!(SchemaVersion::from(2), SchemaVersion::V2);
    // Unknown versions degrade forward instead of failing.
    assert_eq!(SchemaVersion::from(9), SchemaVersion::V2);

    let serialized = serde_json::to_value(SchemaVersion::V2).unwrap();
    assert_eq!(serialized, json!(2));
}

#[test]
fn test_edge_condition_wire_shape() {
    let always = serde_json::to_value(EdgeCondition::Always).unwrap();
    assert_eq!(always, json!({ "type": "always" }));

    let route = serde_json::to_value(EdgeCondition::Route {
        equals: Some("approved".to_string()),
        any_of: vec!["a".to_string()],
    })
    .unwrap();
    assert_eq!(
        route,
        json!({ "type": "route", "equals": "approved", "in": ["a"] })
    );

    let status = serde_json::to_value(EdgeCondition::Status {
        any_of: vec!["completed".to_string()],
    })
    .unwrap();
    assert_eq!(status, json!({ "type": "status", "in": ["completed"] }));
}

#[test]
fn test_step_status_ordering() {
    assert!(StepStatus::Pending < StepStatus::InProgress);
    assert!(StepStatus::InProgress < StepStatus::Completed);
    assert!(!StepStatus::Pending.is_settled());
    assert!(StepStatus::Completed.is_settled());
    assert!(StepStatus::Error.is_settled());
}

#[test]
fn test_response_gate_rejects_stale_tickets() {
    let mut gate = ResponseGate::new();
    let first = gate.begin();
    let second = gate.begin();

    assert!(!gate.accept(first));
    assert!(gate.accept(second));
}

#[test]
fn test_stream_gate_guards_run_and_sequence() {
    let mut gate = StreamGate::new();
    gate.begin_run("run-1");

    assert!(gate.admit("run-1", 1));
    assert!(!gate.admit("run-1", 1), "duplicate sequence");
    assert!(!gate.admit("run-1", 0), "out-of-order sequence");
    assert!(gate.admit("run-1", 5));
    assert!(!gate.admit("run-0", 6), "superseded run");

    gate.begin_run("run-2");
    assert!(gate.admit("run-2", 1), "sequence window resets per run");
    assert!(!gate.admit("run-1", 99));
}

#[test]
fn test_decision_guidance_classification() {
    assert_eq!(
        DecisionGuidance::classify(422, "Waiver reason is required for this decision"),
        DecisionGuidance::WaiverReasonRequired
    );
    assert_eq!(
        DecisionGuidance::classify(422, "Unresolved UNKNOWN findings remain on this document"),
        DecisionGuidance::UnresolvedUnknownFindings
    );
    assert_eq!(
        DecisionGuidance::classify(403, "Forbidden"),
        DecisionGuidance::TaskNotAssigned
    );
    assert_eq!(
        DecisionGuidance::classify(409, "Conflict"),
        DecisionGuidance::AlreadyDecided
    );
    assert_eq!(
        DecisionGuidance::classify(500, "boom"),
        DecisionGuidance::Other("boom".to_string())
    );
}

#[test]
fn test_decision_guidance_messages() {
    let specific = DecisionGuidance::WaiverReasonRequired;
    assert!(specific.message().contains("reason"));

    let relayed = DecisionGuidance::Other("backend said no".to_string());
    assert_eq!(relayed.message(), "backend said no");

    let blank = DecisionGuidance::Other("  ".to_string());
    assert!(!blank.message().trim().is_empty());
}

#[test]
fn test_repair_display_names_the_ids() {
    let repair = Repair::NodeIdRewritten {
        from: "step one".to_string(),
        to: "stepone".to_string(),
    };
    let text = repair.to_string();
    assert!(text.contains("step one"));
    assert!(text.contains("stepone"));
}
