//! Common test utilities for building workflow drafts.
use seiri::prelude::*;

/// Creates a node draft with the given id and type and nothing else.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str) -> NodeDraft {
    NodeDraft {
        id: id.to_string(),
        node_type: node_type.to_string(),
        ..NodeDraft::default()
    }
}

/// Creates an unconditioned edge draft between two raw endpoints.
#[allow(dead_code)]
pub fn edge(from: &str, to: &str) -> EdgeDraft {
    EdgeDraft {
        id: String::new(),
        from: from.to_string(),
        to: to.to_string(),
        when: None,
    }
}

/// Creates a schema v2 draft around the given nodes and edges.
#[allow(dead_code)]
pub fn draft_v2(nodes: Vec<NodeDraft>, edges: Vec<EdgeDraft>) -> WorkflowDraft {
    WorkflowDraft {
        schema_version: SchemaVersion::V2,
        workflow_type: "document_review".to_string(),
        nodes,
        entry_nodes: vec![],
        execution: None,
        edges,
    }
}

/// Creates a schema v1 draft (sequential, no edges honored).
#[allow(dead_code)]
pub fn draft_v1(nodes: Vec<NodeDraft>) -> WorkflowDraft {
    WorkflowDraft {
        schema_version: SchemaVersion::V1,
        workflow_type: "document_review".to_string(),
        nodes,
        entry_nodes: vec![],
        execution: None,
        edges: vec![],
    }
}

/// Checks the persistable identifier shape: `^[A-Za-z][A-Za-z0-9_-]*$`.
#[allow(dead_code)]
pub fn is_valid_ident(id: &str) -> bool {
    let mut chars = id.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Creates a citation with document coordinates and a snippet.
#[allow(dead_code)]
pub fn doc_citation(doc_id: &str, chunk_id: &str, snippet: &str) -> Citation {
    Citation {
        doc_id: Some(doc_id.to_string()),
        chunk_id: Some(chunk_id.to_string()),
        snippet: Some(snippet.to_string()),
        ..Citation::default()
    }
}

/// Creates a step event with just a key and status.
#[allow(dead_code)]
pub fn step_event(key: &str, status: StepStatus) -> StepEvent {
    StepEvent {
        key: key.to_string(),
        label: None,
        status,
        detail: None,
        output: None,
    }
}
