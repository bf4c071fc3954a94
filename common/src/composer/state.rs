/// Why the dialog closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Success,
    Cancelled,
}

/// Lifecycle of one composer instance.
///
/// `Editing` is the initial state. `submit` passes through `Validating` and
/// lands either back in `Editing` (errors surfaced) or in `Submitting`.
/// `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerState {
    #[default]
    Editing,
    Validating,
    Submitting,
    Closed(CloseReason),
}

impl ComposerState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, ComposerState::Submitting)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ComposerState::Closed(_))
    }
}
