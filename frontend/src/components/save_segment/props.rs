//! Properties of the "Save Segment" dialog.

use common::config::SegmentFlowConfig;
use common::model::segment::SegmentPayload;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SaveSegmentProps {
    /// Webhook endpoint and simulated delay. Read once, when the dialog is
    /// created.
    #[prop_or_default]
    pub config: SegmentFlowConfig,

    /// Receives the payload of a completed submission. Always called after
    /// the webhook attempt, whether it went through or not.
    pub on_save: Callback<SegmentPayload>,

    /// Asks the parent to unmount the dialog (after save or cancel).
    pub on_close: Callback<()>,

    /// `true` when a submission starts, `false` once it has completed.
    #[prop_or_default]
    pub on_busy: Callback<bool>,
}
