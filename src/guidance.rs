use std::fmt;

/// Specific guidance for a failed task-decision submission, classified from
/// the HTTP status and the server's error message. The server message formats
/// are not a stable contract, so classification is substring-based and always
/// falls back to relaying the message itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionGuidance {
    /// A waiver decision was submitted without the required reason text.
    WaiverReasonRequired,
    /// The document still has unknown findings that must be resolved first.
    UnresolvedUnknownFindings,
    /// The task belongs to someone else (or to no one reachable).
    TaskNotAssigned,
    /// The task was already decided, usually in another tab or by a teammate.
    AlreadyDecided,
    /// No specific guidance; carries the server's message when there was one.
    Other(String),
}

impl DecisionGuidance {
    pub fn classify(status: u16, message: &str) -> Self {
        let lowered = message.to_ascii_lowercase();

        if lowered.contains("waiver reason") {
            return DecisionGuidance::WaiverReasonRequired;
        }
        if lowered.contains("unknown findings") {
            return DecisionGuidance::UnresolvedUnknownFindings;
        }
        if status == 403 || lowered.contains("not assigned") {
            return DecisionGuidance::TaskNotAssigned;
        }
        if status == 409 || lowered.contains("already decided") {
            return DecisionGuidance::AlreadyDecided;
        }
        DecisionGuidance::Other(message.to_string())
    }

    /// The short, user-facing explanation for this guidance.
    pub fn message(&self) -> String {
        match self {
            DecisionGuidance::WaiverReasonRequired => {
                "A reason is required when waiving this task.".to_string()
            }
            DecisionGuidance::UnresolvedUnknownFindings => {
                "Resolve the remaining unknown findings before deciding.".to_string()
            }
            DecisionGuidance::TaskNotAssigned => {
                "This task is not assigned to you.".to_string()
            }
            DecisionGuidance::AlreadyDecided => {
                "This task has already been decided.".to_string()
            }
            DecisionGuidance::Other(message) if !message.trim().is_empty() => message.clone(),
            DecisionGuidance::Other(_) => "The decision could not be submitted.".to_string(),
        }
    }
}

impl fmt::Display for DecisionGuidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
