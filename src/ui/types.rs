use crate::draft::{
    EdgeDraft, ExecutionDraft, IntoDraft, NodeDraft, NodeRef, SchemaVersion, WorkflowDraft,
};
use crate::error::DraftConversionError;
use serde::Deserialize;

/// A workflow definition as exported by the builder UI, camelCase aliases and
/// all. This is the loose wire shape; nothing in it is trusted to be valid.
#[derive(Debug, Deserialize)]
pub struct UiDefinition {
    #[serde(default, alias = "schemaVersion")]
    pub schema_version: Option<u8>,
    #[serde(default, rename = "type")]
    pub workflow_type: Option<String>,
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default, alias = "entryNodes")]
    pub entry_nodes: Option<Vec<String>>,
    #[serde(default)]
    pub execution: Option<UiExecution>,
    #[serde(default)]
    pub edges: Option<Vec<UiEdge>>,
}

/// A single node as drawn in the builder. The node type may live under any of
/// `node_type`, `nodeType`, or `type`, or only inside the node reference.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "nodeType", alias = "type")]
    pub node_type: Option<String>,
    #[serde(default, alias = "nodeRef")]
    pub node_ref: Option<UiNodeRef>,
    #[serde(default)]
    pub assignee: Option<UiAssignee>,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Reference to a registered node definition.
#[derive(Debug, Deserialize)]
pub struct UiNodeRef {
    pub key: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Task routing target as sent by the builder.
#[derive(Debug, Deserialize)]
pub struct UiAssignee {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A user-drawn edge. React-flow style exports use `source`/`target` for the
/// endpoints; both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "source")]
    pub from: Option<String>,
    #[serde(default, alias = "target")]
    pub to: Option<String>,
    #[serde(default)]
    pub when: Option<serde_json::Value>,
}

/// Execution settings as authored, before any clamping.
#[derive(Debug, Deserialize)]
pub struct UiExecution {
    #[serde(default, alias = "maxParallelism")]
    pub max_parallelism: Option<serde_json::Value>,
    #[serde(default, alias = "onNodeFailure")]
    pub on_node_failure: Option<String>,
}

impl UiDefinition {
    /// Parses a builder export from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DraftConversionError> {
        serde_json::from_str(json).map_err(|e| DraftConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoDraft for UiDefinition {
    fn into_draft(self) -> Result<WorkflowDraft, DraftConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|ui_node| NodeDraft {
                id: ui_node.id.unwrap_or_default(),
                node_type: ui_node.node_type.unwrap_or_default(),
                node_ref: ui_node.node_ref.map(|r| NodeRef {
                    key: r.key,
                    version: r.version,
                }),
                assignee: ui_node.assignee.map(|a| crate::draft::Assignee {
                    kind: a.kind,
                    value: a.value,
                }),
                config: ui_node.config,
                metadata: ui_node.metadata,
            })
            .collect();

        let edges = self
            .edges
            .unwrap_or_default()
            .into_iter()
            .map(|ui_edge| EdgeDraft {
                id: ui_edge.id.unwrap_or_default(),
                from: ui_edge.from.unwrap_or_default(),
                to: ui_edge.to.unwrap_or_default(),
                when: ui_edge.when,
            })
            .collect();

        Ok(WorkflowDraft {
            schema_version: SchemaVersion::from(self.schema_version.unwrap_or(2)),
            workflow_type: self.workflow_type.unwrap_or_default(),
            nodes,
            entry_nodes: self.entry_nodes.unwrap_or_default(),
            execution: self.execution.map(|e| ExecutionDraft {
                max_parallelism: e.max_parallelism,
                on_node_failure: e.on_node_failure,
            }),
            edges,
        })
    }
}
