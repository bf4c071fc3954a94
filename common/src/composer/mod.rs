//! Segment composer: the state machine behind the "Save Segment" dialog.
//!
//! The composer owns the working draft, the staged "add schema" choice, and
//! the current validation errors. Every user action maps to one method that
//! either applies atomically or returns a [`ComposerError`] leaving the
//! composer untouched.
//!
//! Submission is split in two halves so the async pipeline can run between
//! them: [`SegmentComposer::submit`] validates, freezes the draft and yields
//! the payload to send; [`SegmentComposer::finish_submission`] closes the
//! dialog once the pipeline is done, whatever the notification outcome was.

mod draft;
mod errors;
mod state;
mod validation;

pub use draft::SegmentDraft;
pub use errors::ComposerError;
pub use state::{CloseReason, ComposerState};
pub use validation::{validate_draft, FieldError, ValidationErrors, MIN_NAME_LEN};

use crate::model::attribute::{self, AttributeDefinition};
use crate::model::segment::SegmentPayload;
use crate::selector::{SchemaSelector, SelectorChange, EMPTY_SENTINEL};

#[derive(Debug, Default)]
pub struct SegmentComposer {
    draft: SegmentDraft,
    staged: Option<AttributeDefinition>,
    errors: ValidationErrors,
    state: ComposerState,
    in_flight: Option<SegmentPayload>,
}

impl SegmentComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn draft(&self) -> &SegmentDraft {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn selections(&self) -> &[AttributeDefinition] {
        &self.draft.selections
    }

    pub fn staged(&self) -> Option<AttributeDefinition> {
        self.staged
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_submitting()
    }

    /// Attributes not yet in the draft, in catalog order.
    pub fn available(&self) -> Vec<AttributeDefinition> {
        attribute::available_for(&self.draft.selections)
    }

    /// Selector for the row at `index`, or `None` past the end.
    pub fn selector_for(&self, index: usize) -> Option<SchemaSelector> {
        SchemaSelector::for_row(&self.draft.selections, index)
    }

    /// Whether the "Add new schema" action is currently allowed.
    pub fn can_add(&self) -> bool {
        self.ensure_editable().is_ok() && self.staged.is_some() && !self.available().is_empty()
    }

    /// Whether the save button should be enabled. This is a cheaper check
    /// than `validate`: the length rule is only enforced on submit.
    pub fn can_save(&self) -> bool {
        self.ensure_editable().is_ok()
            && !self.draft.trimmed_name().is_empty()
            && !self.draft.selections.is_empty()
    }

    pub fn set_name(&mut self, text: impl Into<String>) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        self.draft.name = text.into();
        self.errors.name = None;
        Ok(())
    }

    /// Stages `key` in the add-picker. The empty sentinel clears the stage.
    pub fn stage_selection(&mut self, key: &str) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        if key == EMPTY_SENTINEL {
            self.staged = None;
            return Ok(());
        }
        let attr = attribute::find(key)
            .ok_or_else(|| ComposerError::UnknownAttribute(key.to_string()))?;
        self.staged = Some(attr);
        Ok(())
    }

    /// Appends the staged attribute and clears the stage. Returns whether a
    /// row was appended: nothing staged, or a key already present, appends
    /// nothing.
    pub fn commit_staged_selection(&mut self) -> Result<bool, ComposerError> {
        self.ensure_editable()?;
        let Some(attr) = self.staged.take() else {
            return Ok(false);
        };
        if self.draft.contains(attr.key) {
            return Ok(false);
        }
        self.draft.selections.push(attr);
        self.errors.selections = None;
        Ok(true)
    }

    /// Applies a row picker change: the empty sentinel removes the row,
    /// anything else replaces it.
    pub fn update_selection_at(&mut self, index: usize, value: &str) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        let selector = self
            .selector_for(index)
            .ok_or(ComposerError::IndexOutOfRange(index))?;
        match selector.change(value) {
            Some(SelectorChange::Remove) => {
                self.draft.selections.remove(index);
            }
            Some(SelectorChange::Replace(attr)) => {
                self.draft.selections[index] = attr;
            }
            None => return Err(ComposerError::UnknownAttribute(value.to_string())),
        }
        Ok(())
    }

    pub fn remove_selection_at(&mut self, index: usize) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        if index >= self.draft.selections.len() {
            return Err(ComposerError::IndexOutOfRange(index));
        }
        self.draft.selections.remove(index);
        Ok(())
    }

    /// Recomputes every validation error and returns whether the draft is
    /// valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Validates and, when valid, freezes the draft in `Submitting`.
    ///
    /// Returns `Ok(None)` when validation failed (errors are available
    /// through [`Self::errors`]) and `Ok(Some(payload))` when the payload
    /// must now go through the submission pipeline.
    pub fn submit(&mut self) -> Result<Option<SegmentPayload>, ComposerError> {
        self.ensure_editable()?;
        self.state = ComposerState::Validating;
        if !self.validate() {
            self.state = ComposerState::Editing;
            return Ok(None);
        }

        let payload = SegmentPayload::new(&self.draft.name, &self.draft.selections);
        self.in_flight = Some(payload.clone());
        self.state = ComposerState::Submitting;
        Ok(Some(payload))
    }

    /// Completes the in-flight submission. Always succeeds while
    /// `Submitting`; the notification outcome plays no part.
    pub fn finish_submission(&mut self) -> Result<SegmentPayload, ComposerError> {
        if !self.state.is_submitting() {
            return Err(ComposerError::NotSubmitting);
        }
        let payload = self.in_flight.take().ok_or(ComposerError::NotSubmitting)?;
        self.discard(CloseReason::Success);
        Ok(payload)
    }

    pub fn cancel(&mut self) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        self.discard(CloseReason::Cancelled);
        Ok(())
    }

    fn discard(&mut self, reason: CloseReason) {
        self.draft = SegmentDraft::default();
        self.staged = None;
        self.errors = ValidationErrors::default();
        self.in_flight = None;
        self.state = ComposerState::Closed(reason);
    }

    fn ensure_editable(&self) -> Result<(), ComposerError> {
        if self.state.is_submitting() {
            Err(ComposerError::Busy)
        } else if self.state.is_closed() {
            Err(ComposerError::Closed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(composer: &SegmentComposer) -> Vec<&'static str> {
        composer.selections().iter().map(|a| a.key).collect()
    }

    fn add(composer: &mut SegmentComposer, key: &str) {
        composer.stage_selection(key).unwrap();
        assert!(composer.commit_staged_selection().unwrap());
    }

    #[test]
    fn test_stage_then_commit_appends_once() {
        let mut composer = SegmentComposer::new();
        composer.stage_selection("age").unwrap();
        assert!(composer.selections().is_empty());
        assert_eq!(composer.staged().map(|a| a.key), Some("age"));

        assert!(composer.commit_staged_selection().unwrap());
        assert_eq!(keys(&composer), vec!["age"]);
        assert!(composer.staged().is_none());

        // stage already cleared
        assert!(!composer.commit_staged_selection().unwrap());
        assert_eq!(keys(&composer), vec!["age"]);
    }

    #[test]
    fn test_commit_skips_duplicate_key() {
        let mut composer = SegmentComposer::new();
        add(&mut composer, "city");
        composer.stage_selection("city").unwrap();
        assert!(!composer.commit_staged_selection().unwrap());
        assert_eq!(keys(&composer), vec!["city"]);
        assert!(composer.staged().is_none());
    }

    #[test]
    fn test_stage_rejects_unknown_and_clears_on_sentinel() {
        let mut composer = SegmentComposer::new();
        assert_eq!(
            composer.stage_selection("email"),
            Err(ComposerError::UnknownAttribute("email".to_string()))
        );
        composer.stage_selection("gender").unwrap();
        composer.stage_selection("").unwrap();
        assert!(composer.staged().is_none());
        assert!(!composer.can_add());
    }

    #[test]
    fn test_update_with_sentinel_removes_and_shifts() {
        let mut composer = SegmentComposer::new();
        for key in ["first_name", "age", "city"] {
            add(&mut composer, key);
        }
        composer.update_selection_at(1, "").unwrap();
        assert_eq!(keys(&composer), vec!["first_name", "city"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut composer = SegmentComposer::new();
        add(&mut composer, "age");
        add(&mut composer, "city");

        composer.update_selection_at(0, "state").unwrap();
        assert_eq!(keys(&composer), vec!["state", "city"]);

        // re-selecting the row's own value is allowed
        composer.update_selection_at(1, "city").unwrap();
        assert_eq!(keys(&composer), vec!["state", "city"]);

        // another row's value is not offered
        assert_eq!(
            composer.update_selection_at(0, "city"),
            Err(ComposerError::UnknownAttribute("city".to_string()))
        );
        assert_eq!(
            composer.update_selection_at(5, "age"),
            Err(ComposerError::IndexOutOfRange(5))
        );
    }

    #[test]
    fn test_remove_selection_at() {
        let mut composer = SegmentComposer::new();
        add(&mut composer, "gender");
        add(&mut composer, "age");
        composer.remove_selection_at(0).unwrap();
        assert_eq!(keys(&composer), vec!["age"]);
        assert_eq!(
            composer.remove_selection_at(1),
            Err(ComposerError::IndexOutOfRange(1))
        );
    }

    #[test]
    fn test_available_never_overlaps_selections() {
        let mut composer = SegmentComposer::new();
        for key in ["state", "first_name", "account_name"] {
            add(&mut composer, key);
            let available = composer.available();
            assert!(available.iter().all(|a| !composer.draft().contains(a.key)));
            assert_eq!(available.len() + composer.selections().len(), 7);
        }
    }

    #[test]
    fn test_all_attributes_selected_disallows_add() {
        let mut composer = SegmentComposer::new();
        for attr in attribute::all() {
            add(&mut composer, attr.key);
        }
        assert!(composer.available().is_empty());

        composer.stage_selection("age").unwrap();
        assert!(!composer.can_add());
        assert!(!composer.commit_staged_selection().unwrap());
        assert_eq!(composer.selections().len(), 7);
    }

    #[test]
    fn test_edits_clear_their_errors_eagerly() {
        let mut composer = SegmentComposer::new();
        assert!(!composer.validate());
        assert!(composer.errors().name.is_some());
        assert!(composer.errors().selections.is_some());

        composer.set_name("x").unwrap();
        assert!(composer.errors().name.is_none());
        assert!(composer.errors().selections.is_some());

        add(&mut composer, "age");
        assert!(composer.errors().is_empty());

        // the short name is only caught on the next full pass
        assert!(!composer.validate());
        assert_eq!(composer.errors().name, Some(FieldError::NameTooShort));
    }

    #[test]
    fn test_submit_short_name_fails_without_selection_error() {
        let mut composer = SegmentComposer::new();
        composer.set_name("ab").unwrap();
        add(&mut composer, "age");

        assert_eq!(composer.submit(), Ok(None));
        assert_eq!(composer.state(), ComposerState::Editing);
        assert_eq!(composer.errors().name, Some(FieldError::NameTooShort));
        assert!(composer.errors().selections.is_none());
    }

    #[test]
    fn test_submit_without_selections_fails_on_selections_only() {
        let mut composer = SegmentComposer::new();
        composer.set_name("VIP Users").unwrap();

        assert_eq!(composer.submit(), Ok(None));
        assert!(composer.errors().name.is_none());
        assert_eq!(
            composer.errors().selections,
            Some(FieldError::SelectionsRequired)
        );
    }

    #[test]
    fn test_submit_success_freezes_draft() {
        let mut composer = SegmentComposer::new();
        composer.set_name(" Loyal Customers ").unwrap();
        add(&mut composer, "age");
        add(&mut composer, "city");
        assert!(composer.can_save());

        let payload = composer.submit().unwrap().unwrap();
        assert_eq!(payload.segment_name, "Loyal Customers");
        assert_eq!(payload.labels().collect::<Vec<_>>(), vec!["Age", "City"]);
        assert!(composer.is_busy());
        assert!(!composer.can_save());
        assert!(!composer.can_add());

        assert_eq!(composer.set_name("other"), Err(ComposerError::Busy));
        assert_eq!(composer.stage_selection("state"), Err(ComposerError::Busy));
        assert_eq!(composer.commit_staged_selection(), Err(ComposerError::Busy));
        assert_eq!(composer.update_selection_at(0, ""), Err(ComposerError::Busy));
        assert_eq!(composer.remove_selection_at(0), Err(ComposerError::Busy));
        assert_eq!(composer.cancel(), Err(ComposerError::Busy));
        assert_eq!(composer.submit(), Err(ComposerError::Busy));
        assert_eq!(keys(&composer), vec!["age", "city"]);

        let finished = composer.finish_submission().unwrap();
        assert_eq!(finished, payload);
        assert_eq!(
            composer.state(),
            ComposerState::Closed(CloseReason::Success)
        );
        assert!(composer.selections().is_empty());
        assert_eq!(
            composer.finish_submission(),
            Err(ComposerError::NotSubmitting)
        );
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut composer = SegmentComposer::new();
        composer.set_name("Churn Risk").unwrap();
        add(&mut composer, "account_name");

        composer.cancel().unwrap();
        assert_eq!(
            composer.state(),
            ComposerState::Closed(CloseReason::Cancelled)
        );
        assert!(composer.state().is_closed());
        assert!(composer.name().is_empty());
        assert!(composer.selections().is_empty());
        assert_eq!(composer.set_name("again"), Err(ComposerError::Closed));
        assert_eq!(composer.cancel(), Err(ComposerError::Closed));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ComposerError::Busy.to_string(),
            "a submission is already in progress"
        );
        assert_eq!(
            ComposerError::IndexOutOfRange(3).to_string(),
            "no schema row at position 3"
        );
        assert_eq!(
            ComposerError::UnknownAttribute("zip".to_string()).to_string(),
            "attribute 'zip' cannot be selected here"
        );
    }

    #[test]
    fn test_finish_without_submit() {
        let mut composer = SegmentComposer::new();
        assert_eq!(
            composer.finish_submission(),
            Err(ComposerError::NotSubmitting)
        );
        assert_eq!(composer.state(), ComposerState::Editing);
    }
}
