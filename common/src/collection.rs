//! Committed segments for the current session.

use chrono::NaiveDate;

use crate::model::attribute;
use crate::model::segment::{Segment, SegmentId, SegmentPayload};

/// Formats a calendar date the way segment cards show it: `Oct 16, 2026`.
/// `month` is 1-based. Returns `None` when the date does not exist.
pub fn format_created_at(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%b %-d, %Y").to_string())
}

/// Hands out timestamp-derived ids that never repeat, even for two commits
/// within the same millisecond or after a clock step backwards.
#[derive(Debug, Default, Clone)]
pub struct SegmentIdGenerator {
    last: Option<SegmentId>,
}

impl SegmentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now_ms: u64) -> SegmentId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

/// Ordered list of committed segments. Insertion order is display order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
}

impl SegmentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Builds a segment from a submitted payload and appends it.
    pub fn commit(
        &mut self,
        payload: SegmentPayload,
        id: SegmentId,
        created_at: impl Into<String>,
    ) -> &Segment {
        let index = self.segments.len();
        self.add(Segment {
            id,
            payload,
            created_at: created_at.into(),
        });
        &self.segments[index]
    }

    /// Removes the segment with `id`. Returns it, or `None` when no segment
    /// matched.
    pub fn remove(&mut self, id: SegmentId) -> Option<Segment> {
        let position = self.segments.iter().position(|segment| segment.id == id)?;
        Some(self.segments.remove(position))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of attribute counts over every segment.
    pub fn total_attributes(&self) -> usize {
        self.segments.iter().map(Segment::attribute_count).sum()
    }

    pub fn available_attributes(&self) -> usize {
        attribute::len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attribute::find;

    fn payload(name: &str, keys: &[&str]) -> SegmentPayload {
        let attrs: Vec<_> = keys.iter().map(|k| find(k).unwrap()).collect();
        SegmentPayload::new(name, &attrs)
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at(2026, 10, 16).as_deref(),
            Some("Oct 16, 2026")
        );
        assert_eq!(format_created_at(2024, 1, 3).as_deref(), Some("Jan 3, 2024"));
        assert!(format_created_at(2024, 0, 1).is_none());
        assert!(format_created_at(2024, 13, 1).is_none());
        assert_eq!(format_created_at(2024, 2, 29).as_deref(), Some("Feb 29, 2024"));
        assert!(format_created_at(2025, 2, 29).is_none());
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ids = SegmentIdGenerator::new();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(1_000), 1_001);
        assert_eq!(ids.next(999), 1_002);
        assert_eq!(ids.next(5_000), 5_000);
    }

    #[test]
    fn test_commit_and_counts() {
        let mut collection = SegmentCollection::new();
        assert!(collection.is_empty());

        let committed = collection.commit(
            payload("Loyal Customers", &["age", "city"]),
            1,
            "Oct 16, 2026",
        );
        assert_eq!(committed.name(), "Loyal Customers");
        collection.commit(payload("VIP Users", &["gender"]), 2, "Oct 16, 2026");

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_attributes(), 3);
        assert_eq!(collection.available_attributes(), 7);
    }

    #[test]
    fn test_commit_appends_after_added_segments() {
        let mut collection = SegmentCollection::new();
        collection.add(Segment {
            id: 3,
            payload: payload("Existing", &["age"]),
            created_at: "Oct 15, 2026".to_string(),
        });

        let committed = collection.commit(payload("Newest", &["city"]), 4, "Oct 16, 2026");
        assert_eq!(committed.id, 4);
        assert_eq!(committed.created_at, "Oct 16, 2026");

        let names: Vec<_> = collection.segments().iter().map(Segment::name).collect();
        assert_eq!(names, vec!["Existing", "Newest"]);
    }

    #[test]
    fn test_delete_first_keeps_second() {
        let mut collection = SegmentCollection::new();
        let mut ids = SegmentIdGenerator::new();
        let first = ids.next(10);
        let second = ids.next(10);
        collection.commit(payload("First", &["age"]), first, "Jan 1, 2026");
        collection.commit(payload("Second", &["city"]), second, "Jan 1, 2026");

        let removed = collection.remove(first).unwrap();
        assert_eq!(removed.name(), "First");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.segments()[0].name(), "Second");
        assert_eq!(collection.segments()[0].id, second);
    }

    #[test]
    fn test_remove_unknown_is_silent() {
        let mut collection = SegmentCollection::new();
        collection.add(Segment {
            id: 7,
            payload: payload("Only", &["state"]),
            created_at: "Feb 2, 2026".to_string(),
        });
        assert!(collection.remove(8).is_none());
        assert_eq!(collection.len(), 1);
    }
}
