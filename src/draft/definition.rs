use serde::{Deserialize, Serialize};

/// The definition schema version. V1 drafts are purely sequential and carry no
/// edges; V2 drafts describe an explicit DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SchemaVersion {
    V1,
    V2,
}

impl From<u8> for SchemaVersion {
    fn from(raw: u8) -> Self {
        // Unknown versions degrade to the current schema rather than failing.
        match raw {
            1 => SchemaVersion::V1,
            _ => SchemaVersion::V2,
        }
    }
}

impl From<SchemaVersion> for u8 {
    fn from(version: SchemaVersion) -> u8 {
        match version {
            SchemaVersion::V1 => 1,
            SchemaVersion::V2 => 2,
        }
    }
}

/// The complete, canonical draft of a workflow definition as authored in the
/// builder, before any normalization. Identifiers may be empty, duplicated, or
/// illegal, and edges may dangle; the `Normalizer` repairs all of that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDraft {
    pub schema_version: SchemaVersion,
    #[serde(rename = "type")]
    pub workflow_type: String,
    pub nodes: Vec<NodeDraft>,
    #[serde(default)]
    pub entry_nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<ExecutionDraft>,
    #[serde(default)]
    pub edges: Vec<EdgeDraft>,
}

/// A single step in the workflow draft.
///
/// `config` and `metadata` are opaque to this crate and are carried through
/// verbatim, except for the documented `ai.classify` label defaulting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<NodeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A reference to a registered node definition (key plus optional version).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Who a human task is routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Assignee {
    /// The assignee applied to `human.*` nodes that do not declare one.
    pub fn default_role() -> Self {
        Self {
            kind: "role".to_string(),
            value: "orgAdmin".to_string(),
        }
    }
}

/// A user-drawn connection between two draft nodes. The `when` condition is
/// kept as loose JSON here; the normalizer shapes it into an `EdgeCondition`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<serde_json::Value>,
}

/// Raw, pre-clamp execution settings as they appear in a draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallelism: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_node_failure: Option<String>,
}
