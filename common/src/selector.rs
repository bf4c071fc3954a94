//! Schema selector: the picker bound to one row of a draft's selections.
//!
//! A selector has no state of its own. It is built from the draft each time
//! the row is rendered and turns a raw `<select>` value into a
//! [`SelectorChange`] that the composer applies.

use crate::model::attribute::{self, AttributeDefinition};

/// Value of the placeholder option. Choosing it removes the row.
pub const EMPTY_SENTINEL: &str = "";

/// What a selector asks the composer to do with its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorChange {
    Remove,
    Replace(AttributeDefinition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSelector {
    pub index: usize,
    pub current: AttributeDefinition,
    pub options: Vec<AttributeDefinition>,
}

impl SchemaSelector {
    /// Builds the selector for row `index`. Its options are the globally
    /// available attributes followed by the row's own value, so a row never
    /// loses the option it currently holds.
    pub fn for_row(selections: &[AttributeDefinition], index: usize) -> Option<Self> {
        let current = *selections.get(index)?;
        let mut options = attribute::available_for(selections);
        options.push(current);
        Some(Self {
            index,
            current,
            options,
        })
    }

    /// Interprets a raw picker value. Values outside the option list are
    /// ignored.
    pub fn change(&self, new_value: &str) -> Option<SelectorChange> {
        if new_value == EMPTY_SENTINEL {
            return Some(SelectorChange::Remove);
        }
        self.options
            .iter()
            .find(|option| option.key == new_value)
            .map(|option| SelectorChange::Replace(*option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attribute::find;

    fn selections(keys: &[&str]) -> Vec<AttributeDefinition> {
        keys.iter().map(|k| find(k).unwrap()).collect()
    }

    #[test]
    fn test_row_keeps_its_own_option_last() {
        let chosen = selections(&["age", "city"]);
        let selector = SchemaSelector::for_row(&chosen, 1).unwrap();

        let keys: Vec<&str> = selector.options.iter().map(|a| a.key).collect();
        assert_eq!(
            keys,
            vec![
                "first_name",
                "last_name",
                "gender",
                "account_name",
                "state",
                "city"
            ]
        );
        assert!(!keys.contains(&"age"));
        assert_eq!(selector.current.key, "city");
    }

    #[test]
    fn test_row_out_of_range() {
        assert!(SchemaSelector::for_row(&selections(&["age"]), 1).is_none());
        assert!(SchemaSelector::for_row(&[], 0).is_none());
    }

    #[test]
    fn test_change_interprets_values() {
        let chosen = selections(&["age", "city"]);
        let selector = SchemaSelector::for_row(&chosen, 0).unwrap();

        assert_eq!(selector.change(""), Some(SelectorChange::Remove));
        assert_eq!(
            selector.change("state"),
            Some(SelectorChange::Replace(find("state").unwrap()))
        );
        assert_eq!(
            selector.change("age"),
            Some(SelectorChange::Replace(find("age").unwrap()))
        );
        // taken by the other row
        assert_eq!(selector.change("city"), None);
        assert_eq!(selector.change("email"), None);
    }
}
