//! View rendering for the page shell.

use common::model::segment::Segment;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SegmentsPage;
use crate::components::helpers::pluralize;
use crate::components::save_segment::SaveSegmentPopup;
use crate::segment_grid::SegmentGrid;

pub fn view(page: &SegmentsPage, ctx: &Context<SegmentsPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            { build_header(page, link) }
            <main class="page-main">
                <div class="hero">
                    <h2>{"Create Customer Segments"}</h2>
                    <p>
                        {"Combine user attributes and behaviors to build targeted segments for personalized marketing campaigns and better customer experiences."}
                    </p>
                </div>
                { build_stats(page) }
                {
                    if page.collection.is_empty() {
                        build_empty_state(link)
                    } else {
                        build_segment_list(page, link)
                    }
                }
            </main>
            <footer class="page-footer">
                <p>{"© 2024 SegmentFlow."}</p>
            </footer>
            {
                if page.show_popup {
                    html! {
                        <SaveSegmentPopup
                            config={ctx.props().config.clone()}
                            on_save={link.callback(Msg::SegmentSaved)}
                            on_close={link.callback(|_| Msg::ClosePopup)}
                            on_busy={link.callback(Msg::SetSaving)}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_header(page: &SegmentsPage, link: &Scope<SegmentsPage>) -> Html {
    html! {
        <header class="page-header">
            <div class="brand">
                <div class="brand-mark"><i class="material-icons">{"verified_user"}</i></div>
                <div>
                    <h1>{"SegmentFlow"}</h1>
                    <p class="hint">{"Customer Segmentation"}</p>
                </div>
            </div>
            <div class="header-actions">
                <div class="header-count">
                    <p class="hint">{"Active Segments"}</p>
                    <p class="count">{ page.collection.len().to_string() }</p>
                </div>
                <div class="divider" />
                <button
                    class="primary-btn"
                    disabled={page.saving}
                    onclick={link.callback(|_| Msg::OpenPopup)}
                >
                    {
                        if page.saving {
                            html! { <span class="spinner" /> }
                        } else {
                            html! { <i class="material-icons">{"add"}</i> }
                        }
                    }
                    <span>{"New Segment"}</span>
                </button>
            </div>
        </header>
    }
}

fn build_stats(page: &SegmentsPage) -> Html {
    html! {
        <div class="stats">
            { stat_card("groups", page.collection.len(), "Active Segments") }
            { stat_card("tune", page.collection.available_attributes(), "Available Attributes") }
            { stat_card("bar_chart", page.collection.total_attributes(), "Total Attributes Used") }
        </div>
    }
}

fn stat_card(icon: &str, value: usize, label: &str) -> Html {
    html! {
        <div class="stat-card">
            <i class="material-icons">{ icon.to_string() }</i>
            <div>
                <p class="count">{ value.to_string() }</p>
                <p class="hint">{ label.to_string() }</p>
            </div>
        </div>
    }
}

fn build_segment_list(page: &SegmentsPage, link: &Scope<SegmentsPage>) -> Html {
    let count = page.collection.len();

    html! {
        <section class="segments">
            <div class="segments-heading">
                <div>
                    <h3>{"Your Segments"}</h3>
                    <p class="hint">{"Manage and analyze your customer segments"}</p>
                </div>
                <span class="pill">{ format!("{} {}", count, pluralize(count, "segment")) }</span>
            </div>
            <SegmentGrid>
                { for page.collection.segments().iter().map(|segment| segment_card(segment, link)) }
            </SegmentGrid>
        </section>
    }
}

fn segment_card(segment: &Segment, link: &Scope<SegmentsPage>) -> Html {
    let id = segment.id;
    let attributes = segment.attribute_count();

    html! {
        <div class="segment-card" key={id.to_string()}>
            <div class="segment-card-header">
                <h4>{ segment.name().to_string() }</h4>
                <button
                    class="icon-btn danger"
                    title="Delete segment"
                    onclick={link.callback(move |_| Msg::DeleteSegment(id))}
                >
                    <i class="material-icons">{"delete"}</i>
                </button>
            </div>
            <p class="hint">{"Included Attributes"}</p>
            <div class="chips">
                { for segment.payload.labels().map(|label| html! {
                    <span class="chip">{ label.to_string() }</span>
                }) }
            </div>
            <div class="segment-card-footer">
                <span class="hint">{ format!("Created {}", segment.created_at) }</span>
                <span class="pill">{ format!("{} {}", attributes, pluralize(attributes, "attribute")) }</span>
            </div>
        </div>
    }
}

fn build_empty_state(link: &Scope<SegmentsPage>) -> Html {
    html! {
        <div class="empty-state">
            <i class="material-icons">{"group_add"}</i>
            <h3>{"No segments yet"}</h3>
            <p>
                {"Start building your first customer segment to unlock powerful targeting capabilities and personalized experiences."}
            </p>
            <button class="primary-btn" onclick={link.callback(|_| Msg::OpenPopup)}>
                <i class="material-icons">{"add"}</i>
                <span>{"Create Your First Segment"}</span>
            </button>
        </div>
    }
}
