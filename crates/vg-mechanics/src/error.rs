//! Error types for the mechanics engine.

/// Errors that can occur during check resolution.
///
/// These are the only fatal conditions in the engine: missing or
/// malformed content (absent protection entries, unrated
/// characteristics, unrecognized rule kinds) degrades to defaults
/// instead of erroring.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// No acting entity was supplied in the check context.
    #[error("no acting entity supplied for check")]
    MissingActor,

    /// The check context declares no domains, so no modifier could
    /// ever apply and the check is unaddressable.
    #[error("check declares no domains")]
    EmptyDomains,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
