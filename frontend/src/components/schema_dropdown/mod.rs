//! Row picker bound to one selected schema of the draft.

use common::selector::{SchemaSelector, EMPTY_SENTINEL};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SchemaDropdownProps {
    pub selector: SchemaSelector,
    /// Receives `(row index, raw option value)`. An empty value asks for the
    /// row to be removed.
    pub on_change: Callback<(usize, String)>,
    #[prop_or_default]
    pub disabled: bool,
}

pub struct SchemaDropdown;

impl Component for SchemaDropdown {
    type Message = ();
    type Properties = SchemaDropdownProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SchemaDropdown
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let index = props.selector.index;
        let current = props.selector.current.key;
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit((index, value));
        });

        html! {
            <div class="schema-dropdown">
                <select {onchange} disabled={props.disabled}>
                    <option value={EMPTY_SENTINEL}>{"Select a schema..."}</option>
                    { for props.selector.options.iter().map(|option| html! {
                        <option
                            key={option.key}
                            value={option.key}
                            selected={option.key == current}
                        >
                            { option.label }
                        </option>
                    }) }
                </select>
                <i class="material-icons schema-dropdown-caret">{"expand_more"}</i>
            </div>
        }
    }
}
