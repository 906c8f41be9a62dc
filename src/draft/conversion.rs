use super::definition::WorkflowDraft;
use crate::error::DraftConversionError;

/// A trait for custom data models that can be converted into a seiri `WorkflowDraft`.
///
/// This is the primary extension point for making seiri format-agnostic. The
/// crate ships a converter for the builder-UI JSON shape (`UiDefinition`), but
/// any client-side representation of a workflow draft can implement this trait
/// to feed the normalizer.
///
/// # Example
///
/// ```rust,no_run
/// use seiri::prelude::*;
/// use seiri::error::DraftConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, kind: String }
/// struct MyFlow { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoDraft` for your top-level struct.
/// impl IntoDraft for MyFlow {
///     fn into_draft(self) -> Result<WorkflowDraft, DraftConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| NodeDraft {
///                 id: step.id,
///                 node_type: step.kind,
///                 ..NodeDraft::default()
///             })
///             .collect();
///
///         Ok(WorkflowDraft {
///             schema_version: SchemaVersion::V2,
///             workflow_type: "custom".to_string(),
///             nodes,
///             entry_nodes: vec![],
///             execution: None,
///             edges: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoDraft {
    /// Consumes the object and converts it into a canonical workflow draft.
    fn into_draft(self) -> Result<WorkflowDraft, DraftConversionError>;
}
