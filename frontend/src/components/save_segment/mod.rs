//! "Save Segment" dialog: a Yew `Component` whose state lives in `state`,
//! whose transitions are in `update`, and whose markup is in `view`.
//!
//! The dialog owns one `SegmentComposer` for its whole lifetime. It is
//! mounted when the user opens it and unmounted through `on_close`, so a new
//! draft starts every time.

use web_sys::HtmlInputElement;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SaveSegmentProps;
pub use state::SaveSegmentPopup;

impl Component for SaveSegmentPopup {
    type Message = Msg;
    type Properties = SaveSegmentProps;

    fn create(ctx: &Context<Self>) -> Self {
        SaveSegmentPopup::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(input) = self.name_input_ref.cast::<HtmlInputElement>() {
                input.focus().ok();
            }
        }
    }
}
