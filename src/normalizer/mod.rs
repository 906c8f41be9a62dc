use crate::draft::{DefinitionPayload, SchemaVersion, WorkflowDraft};
use ahash::{AHashMap, AHashSet};
use std::fmt;

mod edges;
mod ident;
mod nodes;
mod wiring;

use edges::normalize_edges;
use nodes::{NodePassOutput, normalize_nodes};
use wiring::{clamp_execution, reconcile_entry_nodes};

pub use wiring::{AutoWired, auto_wire};

/// The output of a normalization run: the persistable payload, the
/// original-id to final-id remap table, and a record of every repair applied.
pub struct NormalizedDefinition {
    pub payload: DefinitionPayload,
    pub remap: AHashMap<String, String>,
    pub repairs: Vec<Repair>,
}

/// A single best-effort repair applied while normalizing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    NodeIdRewritten { from: String, to: String },
    AssigneeDefaulted { node: String },
    LabelsDefaulted { node: String },
    EdgeIdRewritten { from: String, to: String },
    EdgeDropped {
        from: String,
        to: String,
        reason: EdgeDropReason,
    },
    EntryNodesDefaulted { to: String },
    ParallelismClamped { to: u32 },
    FailurePolicyDefaulted,
}

/// Why an edge was removed from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDropReason {
    MissingEndpoint,
    SelfLoop,
    UnknownEndpoint,
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::NodeIdRewritten { from, to } => {
                write!(f, "node id '{}' rewritten to '{}'", from, to)
            }
            Repair::AssigneeDefaulted { node } => {
                write!(f, "node '{}' assigned to the default role", node)
            }
            Repair::LabelsDefaulted { node } => {
                write!(f, "node '{}' given placeholder classify labels", node)
            }
            Repair::EdgeIdRewritten { from, to } => {
                write!(f, "edge id '{}' rewritten to '{}'", from, to)
            }
            Repair::EdgeDropped { from, to, reason } => {
                let reason = match reason {
                    EdgeDropReason::MissingEndpoint => "an endpoint is missing",
                    EdgeDropReason::SelfLoop => "it loops back to its own node",
                    EdgeDropReason::UnknownEndpoint => "an endpoint matches no node",
                };
                write!(f, "edge '{}' -> '{}' dropped because {}", from, to, reason)
            }
            Repair::EntryNodesDefaulted { to } => {
                write!(f, "entry nodes defaulted to '{}'", to)
            }
            Repair::ParallelismClamped { to } => {
                write!(f, "max_parallelism adjusted to {}", to)
            }
            Repair::FailurePolicyDefaulted => {
                write!(f, "on_node_failure defaulted to fail_fast")
            }
        }
    }
}

/// Transforms a user-edited `WorkflowDraft` into a `DefinitionPayload` that is
/// safe to persist. Normalization is deliberately infallible: every malformed
/// input degrades to a documented default instead of rejecting the save, and
/// the backend stays the final authority on semantic validity.
pub struct Normalizer {
    draft: WorkflowDraft,
    auto_wire_unwired: bool,
}

pub struct NormalizerBuilder {
    draft: WorkflowDraft,
    auto_wire_unwired: bool,
}

impl NormalizerBuilder {
    pub fn new(draft: WorkflowDraft) -> Self {
        Self {
            draft,
            auto_wire_unwired: false,
        }
    }

    /// When the draft is a v2 graph with two or more nodes and no surviving
    /// edges, wire the nodes sequentially instead of saving an unconnected set.
    pub fn with_auto_wire(mut self) -> Self {
        self.auto_wire_unwired = true;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            draft: self.draft,
            auto_wire_unwired: self.auto_wire_unwired,
        }
    }
}

impl Normalizer {
    pub fn builder(draft: WorkflowDraft) -> NormalizerBuilder {
        NormalizerBuilder::new(draft)
    }

    pub fn normalize(self) -> NormalizedDefinition {
        let WorkflowDraft {
            schema_version,
            workflow_type,
            nodes: draft_nodes,
            entry_nodes: declared_entries,
            execution,
            edges: draft_edges,
        } = self.draft;

        let mut repairs = Vec::new();

        let NodePassOutput { nodes, remap } = normalize_nodes(draft_nodes, &mut repairs);
        let valid_ids: AHashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();

        // v1 definitions are sequential and carry no edge list.
        let mut edges = match schema_version {
            SchemaVersion::V1 => Vec::new(),
            SchemaVersion::V2 => normalize_edges(draft_edges, &remap, &valid_ids, &mut repairs),
        };

        let mut entry_nodes = reconcile_entry_nodes(
            declared_entries,
            &remap,
            &valid_ids,
            nodes.first().map(|n| n.id.clone()),
            &mut repairs,
        );

        if self.auto_wire_unwired
            && schema_version == SchemaVersion::V2
            && edges.is_empty()
            && nodes.len() >= 2
        {
            let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
            let wired = auto_wire(&ids);
            edges = wired.edges;
            entry_nodes = wired.entry_nodes;
        }

        let execution = clamp_execution(execution, &mut repairs);

        NormalizedDefinition {
            payload: DefinitionPayload {
                schema_version,
                workflow_type,
                nodes,
                entry_nodes,
                execution,
                edges,
            },
            remap,
            repairs,
        }
    }
}

#[cfg(feature = "debug-tools")]
impl NormalizedDefinition {
    /// Writes a human-readable repair report, for inspecting what the
    /// normalizer changed about a problematic draft.
    pub fn write_report(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;

        let mut report = String::new();
        let _ = writeln!(report, "Repairs applied: {}", self.repairs.len());
        for repair in &self.repairs {
            let _ = writeln!(report, "  - {}", repair);
        }
        let _ = writeln!(report, "Id remap entries: {}", self.remap.len());
        for (from, to) in &self.remap {
            let _ = writeln!(report, "  {} -> {}", from, to);
        }

        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, report)
    }
}
