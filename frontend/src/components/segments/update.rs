//! Update function for the page shell.
//!
//! Saved payloads are committed here: the page assigns the id and creation
//! date, appends the segment, and then shows the blocking confirmation.

use gloo_console::log;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SegmentsPage;
use crate::components::helpers::{confirm_saved, now_ms, today_label};

pub fn update(page: &mut SegmentsPage, _ctx: &Context<SegmentsPage>, msg: Msg) -> bool {
    match msg {
        Msg::OpenPopup => {
            if page.saving || page.show_popup {
                return false;
            }
            page.show_popup = true;
            true
        }
        Msg::ClosePopup => {
            page.show_popup = false;
            true
        }
        Msg::SetSaving(saving) => {
            page.saving = saving;
            true
        }
        Msg::SegmentSaved(payload) => {
            let id = page.ids.next(now_ms());
            let segment = page.collection.commit(payload, id, today_label());
            let name = segment.name().to_string();
            log!(format!(
                "segment {} saved: \"{}\" with {} attribute(s)",
                id,
                name,
                segment.attribute_count()
            ));
            confirm_saved(&name);
            true
        }
        Msg::DeleteSegment(id) => match page.collection.remove(id) {
            Some(segment) => {
                log!(format!("segment {} deleted: \"{}\"", id, segment.name()));
                true
            }
            None => false,
        },
    }
}
