//! Update function for the "Save Segment" dialog.
//!
//! Each message maps to one composer operation. Operations the composer
//! rejects (for instance edits while a save is in flight) are logged to the
//! console and do not re-render.
//!
//! Saving runs in two steps: `Msg::Save` validates and starts the pipeline
//! in the background, `Msg::Delivered` arrives when it has completed and
//! hands the payload to the page. The webhook outcome is only logged.

use common::composer::ComposerError;
use common::pipeline::NotifyOutcome;
use gloo_console::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SaveSegmentPopup;

pub fn update(popup: &mut SaveSegmentPopup, ctx: &Context<SaveSegmentPopup>, msg: Msg) -> bool {
    let result = match msg {
        Msg::SetName(name) => popup.composer.set_name(name),
        Msg::StageSchema(key) => popup.composer.stage_selection(&key),
        Msg::AddSchema => popup.composer.commit_staged_selection().map(|_| ()),
        Msg::ChangeSchema(index, value) => popup.composer.update_selection_at(index, &value),
        Msg::RemoveSchema(index) => popup.composer.remove_selection_at(index),
        Msg::Save => start_save(popup, ctx),
        Msg::Delivered(outcome) => finish_save(popup, ctx, outcome),
        Msg::Cancel => popup
            .composer
            .cancel()
            .map(|()| ctx.props().on_close.emit(())),
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(format!("segment dialog: {}", err));
            false
        }
    }
}

/// Validates the draft and, when it passes, runs the pipeline in the
/// background. Validation errors are left on the composer for the view.
fn start_save(
    popup: &mut SaveSegmentPopup,
    ctx: &Context<SaveSegmentPopup>,
) -> Result<(), ComposerError> {
    let Some(payload) = popup.composer.submit()? else {
        return Ok(());
    };

    ctx.props().on_busy.emit(true);

    let pipeline = popup.pipeline.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = pipeline.deliver(&payload).await;
        link.send_message(Msg::Delivered(outcome));
    });
    Ok(())
}

fn finish_save(
    popup: &mut SaveSegmentPopup,
    ctx: &Context<SaveSegmentPopup>,
    outcome: NotifyOutcome,
) -> Result<(), ComposerError> {
    match &outcome {
        NotifyOutcome::Sent => debug!("segment webhook: request sent"),
        NotifyOutcome::Failed(err) => debug!(format!("segment webhook: {}", err)),
    }

    let payload = popup.composer.finish_submission()?;
    let props = ctx.props();
    props.on_busy.emit(false);
    props.on_save.emit(payload);
    props.on_close.emit(());
    Ok(())
}
