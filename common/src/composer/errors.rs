use thiserror::Error;

/// Misuse of the composer state machine. Validation failures are not errors;
/// they are reported through `ValidationErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    /// A submission is in flight; the draft is frozen until it completes.
    #[error("a submission is already in progress")]
    Busy,
    /// The dialog was already closed (saved or cancelled).
    #[error("the segment dialog is closed")]
    Closed,
    /// No selection row at this position.
    #[error("no schema row at position {0}")]
    IndexOutOfRange(usize),
    /// The key is not in the catalog, or not offered to this row.
    #[error("attribute '{0}' cannot be selected here")]
    UnknownAttribute(String),
    /// `finish_submission` called without a submission in flight.
    #[error("no submission in progress")]
    NotSubmitting,
}
