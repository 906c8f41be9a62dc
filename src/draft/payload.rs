use serde::{Deserialize, Serialize};

use super::definition::{NodeDraft, SchemaVersion};

/// A definition payload that is structurally safe to persist: node ids are
/// unique and well-formed, every edge references existing nodes, entry nodes
/// are valid, and the execution settings are within range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionPayload {
    pub schema_version: SchemaVersion,
    #[serde(rename = "type")]
    pub workflow_type: String,
    pub nodes: Vec<NodeDraft>,
    pub entry_nodes: Vec<String>,
    pub execution: ExecutionSettings,
    pub edges: Vec<Edge>,
}

/// A normalized edge. Both endpoints are guaranteed to be valid node ids and
/// to differ from each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub when: EdgeCondition,
}

/// The four recognized edge condition shapes. Anything malformed in a draft
/// degrades to `Always`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeCondition {
    Always,
    Route {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        equals: Option<String>,
        #[serde(default, rename = "in", skip_serializing_if = "Vec::is_empty")]
        any_of: Vec<String>,
    },
    Status {
        #[serde(rename = "in")]
        any_of: Vec<String>,
    },
    Expression { expression: String },
}

/// Clamped, coerced execution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSettings {
    pub max_parallelism: u32,
    pub on_node_failure: FailurePolicy,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            max_parallelism: DEFAULT_MAX_PARALLELISM,
            on_node_failure: FailurePolicy::FailFast,
        }
    }
}

/// What the engine should do when a node fails mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    FailFast,
    Continue,
}

/// Lower bound for `max_parallelism`.
pub const MIN_MAX_PARALLELISM: u32 = 1;
/// Upper bound for `max_parallelism`.
pub const MAX_MAX_PARALLELISM: u32 = 50;
/// Applied when a draft carries no usable `max_parallelism`.
pub const DEFAULT_MAX_PARALLELISM: u32 = 2;
