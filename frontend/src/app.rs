use crate::components::segments::SegmentsPage;
use common::config::SegmentFlowConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: SegmentFlowConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: SegmentFlowConfig::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <SegmentsPage config={self.config.clone()} />
        }
    }
}
