//! State of the page shell: the session's committed segments and whether
//! the authoring dialog is open.

use common::collection::{SegmentCollection, SegmentIdGenerator};

pub struct SegmentsPage {
    /// Committed segments in display order. Lost on reload.
    pub collection: SegmentCollection,

    /// Turns commit timestamps into unique segment ids.
    pub ids: SegmentIdGenerator,

    /// Whether the "Save Segment" dialog is mounted.
    pub show_popup: bool,

    /// A submission is in flight; the "New Segment" button shows a spinner.
    pub saving: bool,
}

impl SegmentsPage {
    pub fn new() -> Self {
        Self {
            collection: SegmentCollection::new(),
            ids: SegmentIdGenerator::new(),
            show_popup: false,
            saving: false,
        }
    }
}
