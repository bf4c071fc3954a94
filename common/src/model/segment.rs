use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::attribute::AttributeDefinition;

/// Identifier of a committed segment. Derived from the commit timestamp in
/// milliseconds, made strictly increasing by `SegmentIdGenerator`.
pub type SegmentId = u64;

/// One `{ "<key>": "<label>" }` entry of the outbound `schema` array.
///
/// Serialized as a map with exactly one entry, not as a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub key: String,
    pub label: String,
}

impl From<&AttributeDefinition> for SchemaEntry {
    fn from(attr: &AttributeDefinition) -> Self {
        Self {
            key: attr.key.to_string(),
            label: attr.label.to_string(),
        }
    }
}

impl Serialize for SchemaEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.label)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(de::Error::invalid_length(
                map.len(),
                &"a map with exactly one entry",
            ));
        }
        let (key, label) = map
            .into_iter()
            .next()
            .ok_or_else(|| <D::Error as de::Error>::custom("empty schema entry"))?;
        Ok(Self { key, label })
    }
}

/// Body of the webhook POST, built once when a valid draft is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPayload {
    /// Trimmed segment name.
    pub segment_name: String,
    /// Selected attributes in the order they were added.
    pub schema: Vec<SchemaEntry>,
}

impl SegmentPayload {
    pub fn new(name: &str, selections: &[AttributeDefinition]) -> Self {
        Self {
            segment_name: name.trim().to_string(),
            schema: selections.iter().map(SchemaEntry::from).collect(),
        }
    }

    /// Labels in schema order, used for the attribute chips of a card.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.schema.iter().map(|entry| entry.label.as_str())
    }
}

/// A committed segment, owned by the `SegmentCollection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    #[serde(flatten)]
    pub payload: SegmentPayload,
    /// Creation date formatted like `Oct 16, 2026`.
    pub created_at: String,
}

impl Segment {
    pub fn name(&self) -> &str {
        &self.payload.segment_name
    }

    pub fn attribute_count(&self) -> usize {
        self.payload.schema.len()
    }
}
