use uuid::Uuid;
use yew::{html, AttrValue, Component, Context, Html, Properties};

/// Full-screen backdrop with a centered sheet. The sheet is labelled by a
/// visually hidden heading so screen readers announce `title`.
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub title: AttrValue,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title_id = format!("{}-title", self.id);
        html! {
            <div class="modal-backdrop">
                <div
                    class="top-sheet show"
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                >
                    <span class="visually-hidden" id={title_id}>{ ctx.props().title.clone() }</span>
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}
