use super::ident::{IdAllocator, sanitize_identifier};
use super::{EdgeDropReason, Repair};
use crate::draft::{Edge, EdgeCondition, EdgeDraft};
use ahash::{AHashMap, AHashSet};
use serde_json::Value;

/// Walks the draft edges in input order, rewriting endpoints through the node
/// remap table and dropping anything that cannot be made structurally valid.
/// Only schema v2 drafts reach this pass.
pub(super) fn normalize_edges(
    drafts: Vec<EdgeDraft>,
    remap: &AHashMap<String, String>,
    valid_ids: &AHashSet<String>,
    repairs: &mut Vec<Repair>,
) -> Vec<Edge> {
    let mut allocator = IdAllocator::new();
    let mut edges = Vec::with_capacity(drafts.len());

    for (index, draft) in drafts.into_iter().enumerate() {
        let (Some(from), Some(to)) = (
            resolve_endpoint(&draft.from, remap),
            resolve_endpoint(&draft.to, remap),
        ) else {
            drop_edge(&draft, EdgeDropReason::MissingEndpoint, repairs);
            continue;
        };

        if from == to {
            drop_edge(&draft, EdgeDropReason::SelfLoop, repairs);
            continue;
        }
        if !valid_ids.contains(&from) || !valid_ids.contains(&to) {
            drop_edge(&draft, EdgeDropReason::UnknownEndpoint, repairs);
            continue;
        }

        let fallback = format!("edge_{}", index + 1);
        let candidate = if !draft.id.trim().is_empty() {
            draft.id.clone()
        } else {
            format!("{}_to_{}", from, to)
        };
        let id = allocator.claim(sanitize_identifier(&candidate), &fallback);
        if !draft.id.is_empty() && id != draft.id {
            repairs.push(Repair::EdgeIdRewritten {
                from: draft.id.clone(),
                to: id.clone(),
            });
        }

        edges.push(Edge {
            id,
            from,
            to,
            when: normalize_condition(draft.when.as_ref()),
        });
    }

    edges
}

/// Resolves a raw endpoint to a final node id: the remap table when the id was
/// seen during the node pass, direct sanitization otherwise.
fn resolve_endpoint(raw: &str, remap: &AHashMap<String, String>) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    if let Some(mapped) = remap.get(raw) {
        return Some(mapped.clone());
    }
    sanitize_identifier(raw)
}

fn drop_edge(draft: &EdgeDraft, reason: EdgeDropReason, repairs: &mut Vec<Repair>) {
    repairs.push(Repair::EdgeDropped {
        from: draft.from.clone(),
        to: draft.to.clone(),
        reason,
    });
}

/// Shapes a loose `when` value into one of the four recognized conditions.
/// Anything unrecognized or incomplete degrades to `Always`.
pub(super) fn normalize_condition(when: Option<&Value>) -> EdgeCondition {
    let Some(Value::Object(object)) = when else {
        return EdgeCondition::Always;
    };

    match object.get("type").and_then(Value::as_str) {
        Some("route") => {
            let equals = object
                .get("equals")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let any_of = string_list(object.get("in"));
            if equals.is_none() && any_of.is_empty() {
                EdgeCondition::Always
            } else {
                EdgeCondition::Route { equals, any_of }
            }
        }
        Some("status") => {
            let any_of = string_list(object.get("in"));
            if any_of.is_empty() {
                EdgeCondition::Always
            } else {
                EdgeCondition::Status { any_of }
            }
        }
        Some("expression") => match object
            .get("expression")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(expression) => EdgeCondition::Expression {
                expression: expression.to_string(),
            },
            None => EdgeCondition::Always,
        },
        _ => EdgeCondition::Always,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
