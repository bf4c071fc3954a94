use yew::{html, Children, Component, Context, Html, Properties};

/// Narrowest a card may get before the grid drops a column, in pixels.
const MIN_COLUMN_PX: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct SegmentGridProps {
    pub children: Children,
}

/// Responsive grid holding the saved segment cards.
pub struct SegmentGrid;

impl Component for SegmentGrid {
    type Message = ();
    type Properties = SegmentGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SegmentGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 1.5rem;",
            MIN_COLUMN_PX
        );

        html! {
            <div class="segment-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
