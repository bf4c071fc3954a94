use common::config::SegmentFlowConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SegmentsPageProps {
    /// Forwarded to every "Save Segment" dialog the page opens.
    #[prop_or_default]
    pub config: SegmentFlowConfig,
}
