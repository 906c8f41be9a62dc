//! # Seiri - Workflow Draft Normalization Engine
//!
//! **Seiri** takes user-edited workflow drafts from a visual builder (with
//! possibly duplicate, empty, or illegal identifiers and dangling edges) and
//! produces definition payloads that are structurally valid and safe to
//! persist, while preserving the author's intent: node order, references, and
//! conditions survive; only what is broken gets repaired.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a "workflow draft." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your builder export (e.g. from JSON) into your
//!     own Rust structs, or use the bundled [`ui::UiDefinition`] wire shape.
//! 2.  **Convert to Seiri's Model**: Implement the `IntoDraft` trait for your
//!     structs to provide a translation layer into a [`draft::WorkflowDraft`].
//! 3.  **Normalize**: Use `Normalizer::builder` to create a normalizer with the
//!     draft. Normalization is infallible: every malformed input degrades to a
//!     documented default instead of rejecting the save.
//! 4.  **Persist**: Serialize the resulting `DefinitionPayload` to JSON for the
//!     save call, or snapshot it locally with `DraftSnapshot`.
//!
//! ## Quick Start
//!
//! ```rust
//! use seiri::prelude::*;
//!
//! let draft = WorkflowDraft {
//!     schema_version: SchemaVersion::V2,
//!     workflow_type: "document_review".to_string(),
//!     nodes: vec![
//!         NodeDraft { id: "extract".to_string(), node_type: "ai.extract".to_string(), ..NodeDraft::default() },
//!         NodeDraft { id: "extract".to_string(), node_type: "human.review".to_string(), ..NodeDraft::default() },
//!     ],
//!     entry_nodes: vec![],
//!     execution: None,
//!     edges: vec![],
//! };
//!
//! let normalized = Normalizer::builder(draft).with_auto_wire().build().normalize();
//!
//! // The duplicate id was suffixed, the human step got a default assignee,
//! // and the two nodes were wired sequentially.
//! let ids: Vec<&str> = normalized.payload.nodes.iter().map(|n| n.id.as_str()).collect();
//! assert_eq!(ids, ["extract", "extract_2"]);
//! assert_eq!(normalized.payload.edges.len(), 1);
//! assert_eq!(normalized.payload.entry_nodes, vec!["extract".to_string()]);
//! ```
//!
//! Beyond the normalizer, the crate bundles the smaller pieces of client-side
//! data shaping from the same product surface: citation deduplication and
//! activity-timeline synthesis for the chat views ([`merge`]), staleness
//! guards for polling and streaming ([`sync`]), and task-decision error
//! classification ([`guidance`]).

pub mod draft;
pub mod error;
pub mod guidance;
pub mod merge;
pub mod normalizer;
pub mod prelude;
pub mod sync;
pub mod ui;
