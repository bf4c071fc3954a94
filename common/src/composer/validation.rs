//! Form validation for the segment draft.
//!
//! Errors are recomputed from scratch on every pass; nothing from a previous
//! pass survives except what the composer clears eagerly on edit.

use super::draft::SegmentDraft;

pub const MIN_NAME_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    SelectionsRequired,
}

impl FieldError {
    /// Inline message shown under the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "Segment name is required",
            FieldError::NameTooShort => "Segment name must be at least 3 characters",
            FieldError::SelectionsRequired => "Please add at least one schema",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub selections: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.selections.is_none()
    }

    pub fn name_message(&self) -> Option<&'static str> {
        self.name.as_ref().map(FieldError::message)
    }

    pub fn selections_message(&self) -> Option<&'static str> {
        self.selections.as_ref().map(FieldError::message)
    }
}

/// Validates `draft`. The name is judged after trimming, in characters; an
/// empty name reports `NameRequired` rather than `NameTooShort`.
pub fn validate_draft(draft: &SegmentDraft) -> ValidationErrors {
    let name = draft.trimmed_name();
    let name_error = if name.is_empty() {
        Some(FieldError::NameRequired)
    } else if name.chars().count() < MIN_NAME_LEN {
        Some(FieldError::NameTooShort)
    } else {
        None
    };

    let selections_error = if draft.selections.is_empty() {
        Some(FieldError::SelectionsRequired)
    } else {
        None
    };

    ValidationErrors {
        name: name_error,
        selections: selections_error,
    }
}
