//! Markup of the "Save Segment" dialog.
//!
//! Layout, top to bottom: header with the close button, segment name input,
//! the list of selected schemas (one `SchemaDropdown` per row), the add-schema
//! picker, and the footer with Cancel / Save. Every control is disabled while
//! a submission is in flight.

use common::model::attribute;
use common::selector::EMPTY_SENTINEL;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SaveSegmentPopup;
use crate::components::helpers::pluralize;
use crate::components::schema_dropdown::SchemaDropdown;
use crate::tops_sheet::modal_sheet::ModalSheet;

pub fn view(popup: &SaveSegmentPopup, ctx: &Context<SaveSegmentPopup>) -> Html {
    let link = ctx.link();
    let busy = popup.composer.is_busy();

    html! {
        <ModalSheet title="Save Segment">
            { build_header(link, busy) }
            <div class="popup-body">
                { build_name_field(popup, link, busy) }
                { build_schema_section(popup, link, busy) }
                { build_add_schema(popup, link, busy) }
            </div>
            { build_footer(popup, link, busy) }
        </ModalSheet>
    }
}

fn build_header(link: &Scope<SaveSegmentPopup>, busy: bool) -> Html {
    html! {
        <div class="popup-header">
            <div>
                <h2>{"Save Segment"}</h2>
                <p class="popup-subtitle">{"Define your customer segment criteria"}</p>
            </div>
            <button
                class="icon-btn"
                title="Close"
                disabled={busy}
                onclick={link.callback(|_| Msg::Cancel)}
            >
                <i class="material-icons">{"close"}</i>
            </button>
        </div>
    }
}

fn build_name_field(popup: &SaveSegmentPopup, link: &Scope<SaveSegmentPopup>, busy: bool) -> Html {
    let error = popup.composer.errors().name_message();

    html! {
        <div class="field">
            <label for="segment-name">{"Segment Name *"}</label>
            <input
                id="segment-name"
                type="text"
                ref={popup.name_input_ref.clone()}
                class={classes!("text-input", error.map(|_| "invalid"))}
                value={popup.composer.name().to_string()}
                placeholder="e.g., last_10_days_blog_visits"
                disabled={busy}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            { error_line(error) }
        </div>
    }
}

fn build_schema_section(
    popup: &SaveSegmentPopup,
    link: &Scope<SaveSegmentPopup>,
    busy: bool,
) -> Html {
    let selected = popup.composer.selections().len();
    let error = popup.composer.errors().selections_message();
    let on_change = link.callback(|(index, value): (usize, String)| Msg::ChangeSchema(index, value));

    let rows = (0..selected)
        .filter_map(|index| popup.composer.selector_for(index))
        .map(|selector| {
            let index = selector.index;
            let key = selector.current.key;
            html! {
                <div class="schema-row" key={key}>
                    <span class="schema-dot" />
                    <SchemaDropdown
                        selector={selector}
                        on_change={on_change.clone()}
                        disabled={busy}
                    />
                    <button
                        class="icon-btn danger"
                        title="Remove schema"
                        disabled={busy}
                        onclick={link.callback(move |_| Msg::RemoveSchema(index))}
                    >
                        <i class="material-icons">{"remove"}</i>
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="field">
            <div class="schema-heading">
                <div>
                    <h3>{"Segment Schemas *"}</h3>
                    <p class="hint">{"Add schemas to define your segment"}</p>
                </div>
                <span class="pill">
                    { format!("{} of {} added", selected, attribute::len()) }
                </span>
            </div>
            <div class={classes!("schema-box", error.map(|_| "invalid"))}>
                {
                    if selected > 0 {
                        html! { <div class="schema-rows">{ rows }</div> }
                    } else {
                        html! {
                            <div class="schema-empty">
                                <p>{"No schemas added yet"}</p>
                                <p class="hint">{"Add schemas below to define your segment"}</p>
                            </div>
                        }
                    }
                }
                { error_line(error) }
            </div>
        </div>
    }
}

fn build_add_schema(popup: &SaveSegmentPopup, link: &Scope<SaveSegmentPopup>, busy: bool) -> Html {
    let available = popup.composer.available();
    let staged = popup.composer.staged().map(|attr| attr.key).unwrap_or(EMPTY_SENTINEL);
    let exhausted = available.is_empty();

    html! {
        <div class="field add-schema">
            <label>{"Add schema to segment"}</label>
            <div class="add-schema-row">
                <div class="add-schema-picker">
                    <select
                        disabled={busy || exhausted}
                        onchange={link.callback(|e: Event| {
                            Msg::StageSchema(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                        onkeypress={link.batch_callback(move |e: KeyboardEvent| {
                            if e.key() == "Enter" && staged != EMPTY_SENTINEL {
                                vec![Msg::AddSchema]
                            } else {
                                vec![]
                            }
                        })}
                    >
                        <option value={EMPTY_SENTINEL} selected={staged == EMPTY_SENTINEL}>
                            {"Choose a schema..."}
                        </option>
                        { for available.iter().map(|option| html! {
                            <option
                                key={option.key}
                                value={option.key}
                                selected={option.key == staged}
                            >
                                { option.label }
                            </option>
                        }) }
                    </select>
                    {
                        if exhausted {
                            html! { <p class="hint">{"All available schemas have been added"}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <button
                    class="link-btn"
                    disabled={!popup.composer.can_add()}
                    onclick={link.callback(|_| Msg::AddSchema)}
                >
                    <i class="material-icons">{"add"}</i>
                    {"+Add new schema"}
                </button>
            </div>
        </div>
    }
}

fn build_footer(popup: &SaveSegmentPopup, link: &Scope<SaveSegmentPopup>, busy: bool) -> Html {
    let selected = popup.composer.selections().len();

    html! {
        <div class="popup-footer">
            <div class="hint">
                {
                    if selected > 0 {
                        html! { <span>{ format!("{} {} selected", selected, pluralize(selected, "schema")) }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="popup-actions">
                <button
                    class="secondary-btn"
                    disabled={busy}
                    onclick={link.callback(|_| Msg::Cancel)}
                >
                    {"Cancel"}
                </button>
                <button
                    class="primary-btn"
                    disabled={!popup.composer.can_save()}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    {
                        if busy {
                            html! { <><span class="spinner" />{"Saving Segment..."}</> }
                        } else {
                            html! { <><i class="material-icons">{"save"}</i>{"Save the segment"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}

fn error_line(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! {
            <p class="field-error">
                <i class="material-icons">{"error_outline"}</i>
                { message }
            </p>
        },
        None => html! {},
    }
}
