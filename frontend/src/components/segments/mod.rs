//! Page shell: header with counters, stat cards, the grid of saved segments,
//! and the "Save Segment" dialog when it is open.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SegmentsPageProps;
pub use state::SegmentsPage;

impl Component for SegmentsPage {
    type Message = Msg;
    type Properties = SegmentsPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SegmentsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
