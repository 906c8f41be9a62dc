use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Lifecycle of an activity step. The order of the variants is the order of
/// the lifecycle; a step never moves backwards, and `Completed`/`Error` are
/// terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
    Error,
}

impl StepStatus {
    /// A settled step has reached a terminal status and will not change again.
    pub fn is_settled(self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Error)
    }
}

/// One incremental event from the activity/tool-usage stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEvent {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub status: StepStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

/// A stable row in the synthesized timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStep {
    pub key: String,
    pub label: String,
    pub status: StepStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

/// Collapses a stream of incremental step events into a stable, keyed,
/// status-monotonic timeline. Steps appear in the order they were first seen;
/// duplicate events for a key update the existing row instead of adding one.
#[derive(Debug, Default)]
pub struct ActivityTimeline {
    order: Vec<String>,
    steps: AHashMap<String, ActivityStep>,
}

impl ActivityTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event. Status only ever advances (`pending -> in_progress
    /// -> {completed | error}`); a settled step keeps its status, though later
    /// events may still fill in detail and output fields.
    pub fn apply(&mut self, event: StepEvent) {
        if let Some(step) = self.steps.get_mut(&event.key) {
            if !step.status.is_settled() && event.status > step.status {
                step.status = event.status;
            }
            if let Some(label) = event.label {
                step.label = label;
            }
            if event.detail.is_some() {
                step.detail = event.detail;
            }
            if event.output.is_some() {
                step.output = event.output;
            }
            return;
        }

        let step = ActivityStep {
            label: event.label.unwrap_or_else(|| event.key.clone()),
            key: event.key.clone(),
            status: event.status,
            detail: event.detail,
            output: event.output,
        };
        self.order.push(event.key);
        self.steps.insert(step.key.clone(), step);
    }

    /// The timeline rows in first-seen order.
    pub fn steps(&self) -> Vec<&ActivityStep> {
        self.order
            .iter()
            .filter_map(|key| self.steps.get(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the timeline, yielding owned rows in first-seen order.
    pub fn into_steps(mut self) -> Vec<ActivityStep> {
        self.order
            .iter()
            .filter_map(|key| self.steps.remove(key))
            .collect()
    }
}
