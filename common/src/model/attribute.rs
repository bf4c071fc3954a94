//! Attribute catalog: the fixed list of customer attributes a segment can be
//! built from.
//!
//! The catalog never changes at runtime. Display order is the order of
//! [`CATALOG`], and every query preserves it.

use serde::Serialize;

/// One selectable customer attribute. Identity is the `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeDefinition {
    /// Machine name sent on the wire (e.g. `first_name`).
    pub key: &'static str,
    /// Human label shown in pickers and segment cards.
    pub label: &'static str,
}

impl AttributeDefinition {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Every attribute available for selection, in display order.
pub const CATALOG: [AttributeDefinition; 7] = [
    AttributeDefinition::new("first_name", "First Name"),
    AttributeDefinition::new("last_name", "Last Name"),
    AttributeDefinition::new("gender", "Gender"),
    AttributeDefinition::new("age", "Age"),
    AttributeDefinition::new("account_name", "Account Name"),
    AttributeDefinition::new("city", "City"),
    AttributeDefinition::new("state", "State"),
];

/// Full catalog in display order.
pub fn all() -> &'static [AttributeDefinition] {
    &CATALOG
}

/// Number of catalog entries, shown on the "Available Attributes" card.
pub fn len() -> usize {
    CATALOG.len()
}

/// Looks an attribute up by key.
pub fn find(key: &str) -> Option<AttributeDefinition> {
    CATALOG.iter().copied().find(|attr| attr.key == key)
}

/// Returns every catalog entry whose key is not already in `selections`,
/// preserving catalog order.
pub fn available_for(selections: &[AttributeDefinition]) -> Vec<AttributeDefinition> {
    CATALOG
        .iter()
        .copied()
        .filter(|attr| !selections.iter().any(|chosen| chosen.key == attr.key))
        .collect()
}
