use common::composer::SegmentComposer;
use common::config::SegmentFlowConfig;
use yew::NodeRef;

use crate::webhook::{browser_pipeline, BrowserPipeline};

/// State of the dialog: the composer owning the draft, plus the pipeline
/// used when the draft is submitted.
pub struct SaveSegmentPopup {
    pub composer: SegmentComposer,
    pub pipeline: BrowserPipeline,

    /// Segment name `<input>`, focused when the dialog opens.
    pub name_input_ref: NodeRef,
}

impl SaveSegmentPopup {
    pub fn new(config: &SegmentFlowConfig) -> Self {
        Self {
            composer: SegmentComposer::new(),
            pipeline: browser_pipeline(config),
            name_input_ref: NodeRef::default(),
        }
    }
}
