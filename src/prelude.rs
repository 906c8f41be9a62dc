//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! seiri crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use seiri::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a builder export and normalize it for saving
//! let draft_json = std::fs::read_to_string("path/to/draft.json")?;
//!
//! let draft = UiDefinition::from_json(&draft_json)?.into_draft()?;
//! let normalized = Normalizer::builder(draft).build().normalize();
//!
//! println!("{} repairs applied", normalized.repairs.len());
//! println!("{}", serde_json::to_string_pretty(&normalized.payload)?);
//! # Ok(())
//! # }
//! ```

// Core normalization
pub use crate::normalizer::{
    AutoWired, EdgeDropReason, NormalizedDefinition, Normalizer, NormalizerBuilder, Repair,
    auto_wire,
};

// Draft and payload types
pub use crate::draft::{
    Assignee, DefinitionPayload, DraftSnapshot, Edge, EdgeCondition, EdgeDraft, ExecutionDraft,
    ExecutionSettings, FailurePolicy, IntoDraft, NodeDraft, NodeRef, SchemaVersion, WorkflowDraft,
};

// Builder-UI wire format
pub use crate::ui::UiDefinition;

// Chat-view merge utilities
pub use crate::merge::{
    ActivityStep, ActivityTimeline, Citation, StepEvent, StepStatus, merge_citations,
};

// Staleness guards
pub use crate::sync::{ResponseGate, StreamGate};

// Task-decision guidance
pub use crate::guidance::DecisionGuidance;

// Error types
pub use crate::error::{DraftConversionError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
