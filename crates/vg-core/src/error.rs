//! Error types for the core data model.

/// Errors that can occur while loading core data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A rule element list could not be deserialized.
    #[error("malformed rule elements: {0}")]
    MalformedRules(#[from] serde_json::Error),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
