use crate::model::attribute::AttributeDefinition;

/// The in-progress segment. Owned by the composer and dropped when the
/// dialog closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentDraft {
    pub name: String,
    /// Selected attributes in insertion order. Keys are unique.
    pub selections: Vec<AttributeDefinition>,
}

impl SegmentDraft {
    pub fn contains(&self, key: &str) -> bool {
        self.selections.iter().any(|attr| attr.key == key)
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}
