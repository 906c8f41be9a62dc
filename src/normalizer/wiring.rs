use super::Repair;
use super::ident::sanitize_identifier;
use crate::draft::{
    DEFAULT_MAX_PARALLELISM, Edge, EdgeCondition, ExecutionDraft, ExecutionSettings, FailurePolicy,
    MAX_MAX_PARALLELISM, MIN_MAX_PARALLELISM,
};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

/// The result of sequentially wiring a list of nodes.
#[derive(Debug, Clone)]
pub struct AutoWired {
    pub edges: Vec<Edge>,
    pub entry_nodes: Vec<String>,
}

/// One-click default wiring: connects the given node ids into a straight line
/// (`ids[i] -> ids[i+1]`, condition `Always`) and makes the first node the
/// sole entry point. Fewer than two ids produce no edges.
pub fn auto_wire<S: AsRef<str>>(node_ids: &[S]) -> AutoWired {
    let entry_nodes = node_ids
        .first()
        .map(|id| vec![id.as_ref().to_string()])
        .unwrap_or_default();

    let edges = node_ids
        .iter()
        .tuple_windows()
        .map(|(from, to)| Edge {
            id: format!("{}_to_{}", from.as_ref(), to.as_ref()),
            from: from.as_ref().to_string(),
            to: to.as_ref().to_string(),
            when: EdgeCondition::Always,
        })
        .collect();

    AutoWired { edges, entry_nodes }
}

/// Filters the declared entry nodes down to remapped, currently-valid ids.
/// When none survive, the first node in the normalized list becomes the entry.
pub(super) fn reconcile_entry_nodes(
    declared: Vec<String>,
    remap: &AHashMap<String, String>,
    valid_ids: &AHashSet<String>,
    first_node_id: Option<String>,
    repairs: &mut Vec<Repair>,
) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut entries: Vec<String> = declared
        .iter()
        .filter_map(|raw| {
            let resolved = remap
                .get(raw)
                .cloned()
                .or_else(|| sanitize_identifier(raw))?;
            (valid_ids.contains(&resolved) && seen.insert(resolved.clone())).then_some(resolved)
        })
        .collect();

    if entries.is_empty() {
        if let Some(first) = first_node_id {
            repairs.push(Repair::EntryNodesDefaulted { to: first.clone() });
            entries.push(first);
        }
    }
    entries
}

/// Clamps `max_parallelism` into `[1, 50]` and coerces the failure policy to
/// exactly `fail_fast` or `continue`. Every invalid input takes the default.
pub(super) fn clamp_execution(
    draft: Option<ExecutionDraft>,
    repairs: &mut Vec<Repair>,
) -> ExecutionSettings {
    let draft = draft.unwrap_or_default();

    let max_parallelism = match draft.max_parallelism {
        None => DEFAULT_MAX_PARALLELISM,
        Some(value) => {
            let parsed = value
                .as_i64()
                .or_else(|| {
                    value
                        .as_f64()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| f as i64)
                })
                .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()));
            match parsed {
                Some(n) => {
                    let clamped =
                        n.clamp(MIN_MAX_PARALLELISM as i64, MAX_MAX_PARALLELISM as i64) as u32;
                    if i64::from(clamped) != n {
                        repairs.push(Repair::ParallelismClamped { to: clamped });
                    }
                    clamped
                }
                None => {
                    repairs.push(Repair::ParallelismClamped {
                        to: DEFAULT_MAX_PARALLELISM,
                    });
                    DEFAULT_MAX_PARALLELISM
                }
            }
        }
    };

    let on_node_failure = match draft.on_node_failure.as_deref().map(str::trim) {
        Some("fail_fast") | None => FailurePolicy::FailFast,
        Some("continue") => FailurePolicy::Continue,
        Some(_) => {
            repairs.push(Repair::FailurePolicyDefaulted);
            FailurePolicy::FailFast
        }
    };

    ExecutionSettings {
        max_parallelism,
        on_node_failure,
    }
}
