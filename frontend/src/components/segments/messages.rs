use common::model::segment::{SegmentId, SegmentPayload};

pub enum Msg {
    OpenPopup,
    ClosePopup,
    SetSaving(bool),
    SegmentSaved(SegmentPayload),
    DeleteSegment(SegmentId),
}
