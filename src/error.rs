use thiserror::Error;

/// Errors that can occur when converting a custom builder format into a `WorkflowDraft`.
///
/// Normalization itself never fails; these errors only exist at the conversion
/// boundary, where the input may not even be parseable.
#[derive(Error, Debug, Clone)]
pub enum DraftConversionError {
    #[error("Failed to parse draft JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid draft data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a `DraftSnapshot`.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot decoding failed: {0}")]
    Decode(String),
}
