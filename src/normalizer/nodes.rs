use super::ident::{IdAllocator, sanitize_identifier};
use super::Repair;
use crate::draft::{Assignee, NodeDraft};
use ahash::AHashMap;
use serde_json::{Value, json};

/// Default labels applied to `ai.classify` nodes with no usable label source.
const DEFAULT_CLASSIFY_LABELS: [&str; 2] = ["label_a", "label_b"];

pub(super) struct NodePassOutput {
    pub nodes: Vec<NodeDraft>,
    pub remap: AHashMap<String, String>,
}

/// Walks the draft nodes in input order, producing nodes with unique,
/// well-formed ids plus the original-id to final-id remap table that the edge
/// pass uses to keep user-drawn references intact.
pub(super) fn normalize_nodes(drafts: Vec<NodeDraft>, repairs: &mut Vec<Repair>) -> NodePassOutput {
    let mut allocator = IdAllocator::new();
    let mut remap: AHashMap<String, String> = AHashMap::new();
    let mut nodes = Vec::with_capacity(drafts.len());

    for (index, mut node) in drafts.into_iter().enumerate() {
        resolve_node_type(&mut node);

        let fallback = format!("step_{}", index + 1);
        let candidate = if !node.id.trim().is_empty() {
            node.id.clone()
        } else if !node.node_type.is_empty() {
            node.node_type.replace('.', "_")
        } else {
            fallback.clone()
        };

        let final_id = allocator.claim(sanitize_identifier(&candidate), &fallback);

        if !node.id.is_empty() {
            if node.id != final_id {
                repairs.push(Repair::NodeIdRewritten {
                    from: node.id.clone(),
                    to: final_id.clone(),
                });
            }
            // First occurrence wins: edges pointing at a duplicated id keep
            // following the node that kept it.
            remap.entry(node.id.clone()).or_insert_with(|| final_id.clone());
        }
        node.id = final_id;

        apply_type_defaults(&mut node, repairs);
        nodes.push(node);
    }

    NodePassOutput { nodes, remap }
}

/// Fills in `node_type` from the node reference when the draft left it blank.
/// The UI-level `type`/`nodeType` spellings are already folded in by serde.
fn resolve_node_type(node: &mut NodeDraft) {
    if node.node_type.trim().is_empty() {
        if let Some(node_ref) = &node.node_ref {
            node.node_type = node_ref.key.clone();
        }
    }
}

fn apply_type_defaults(node: &mut NodeDraft, repairs: &mut Vec<Repair>) {
    if node.node_type.starts_with("human.") && node.assignee.is_none() {
        node.assignee = Some(Assignee::default_role());
        repairs.push(Repair::AssigneeDefaulted {
            node: node.id.clone(),
        });
    }

    if node.node_type == "ai.classify" && !has_usable_labels(node.config.as_ref()) {
        let labels: Vec<Value> = DEFAULT_CLASSIFY_LABELS
            .iter()
            .map(|label| json!(label))
            .collect();
        match &mut node.config {
            Some(Value::Object(config)) => {
                config.insert("labels".to_string(), Value::Array(labels));
            }
            None => {
                node.config = Some(json!({ "labels": labels }));
            }
            // A non-object config is left alone; the backend will reject it.
            Some(_) => return,
        }
        repairs.push(Repair::LabelsDefaulted {
            node: node.id.clone(),
        });
    }
}

/// A classify node is considered labeled when `config.labels` is either a list
/// containing at least one non-blank string, or a non-blank string binding an
/// upstream input.
fn has_usable_labels(config: Option<&Value>) -> bool {
    match config.and_then(|c| c.get("labels")) {
        Some(Value::Array(items)) => items
            .iter()
            .any(|item| item.as_str().is_some_and(|s| !s.trim().is_empty())),
        Some(Value::String(binding)) => !binding.trim().is_empty(),
        _ => false,
    }
}
