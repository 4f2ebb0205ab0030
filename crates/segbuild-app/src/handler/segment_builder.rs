//! Segment modal handlers
//!
//! Every handler is a no-op when the modal is closed. Invariant violations
//! coming back from the builder are logged and leave the draft unchanged.

use segbuild_client::Delivery;
use segbuild_core::prelude::*;

use crate::notifications::{Notifier, SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE};
use crate::segment_builder::{BuilderId, SegmentBuilderState};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Run `f` against the open builder, if any
fn with_builder(state: &mut AppState, f: impl FnOnce(&mut SegmentBuilderState)) -> UpdateResult {
    if let Some(builder) = state.builder.as_mut() {
        f(builder);
    }
    UpdateResult::none()
}

fn log_rejected(operation: &str, result: Result<()>) {
    match result {
        Err(e) if e.is_invariant_violation() => warn!("{} rejected: {}", operation, e),
        Err(e) => error!("{} failed: {}", operation, e),
        Ok(()) => {}
    }
}

pub fn handle_set_name(state: &mut AppState, name: String) -> UpdateResult {
    with_builder(state, |b| b.set_name(name))
}

pub fn handle_name_input(state: &mut AppState, c: char) -> UpdateResult {
    with_builder(state, |b| b.input_char(c))
}

pub fn handle_name_backspace(state: &mut AppState) -> UpdateResult {
    with_builder(state, |b| b.backspace())
}

pub fn handle_select_pending(state: &mut AppState, key: &str) -> UpdateResult {
    with_builder(state, |b| log_rejected("select_pending", b.select_pending(key)))
}

pub fn handle_cycle_pending(state: &mut AppState, forward: bool) -> UpdateResult {
    with_builder(state, |b| b.cycle_pending(forward))
}

pub fn handle_commit_pending(state: &mut AppState) -> UpdateResult {
    with_builder(state, |b| {
        if b.commit_pending() {
            debug!("schema added, selection is now {:?}", b.selected_keys());
        }
    })
}

pub fn handle_edit_at(state: &mut AppState, index: usize, key: &str) -> UpdateResult {
    with_builder(state, |b| log_rejected("edit_at", b.edit_at(index, key)))
}

pub fn handle_cycle_row(state: &mut AppState, index: usize, forward: bool) -> UpdateResult {
    with_builder(state, |b| log_rejected("cycle_row", b.cycle_row(index, forward)))
}

pub fn handle_remove_at(state: &mut AppState, index: usize) -> UpdateResult {
    with_builder(state, |b| {
        b.remove_at(index);
    })
}

pub fn handle_remove_by_key(state: &mut AppState, key: &str) -> UpdateResult {
    with_builder(state, |b| {
        b.remove_by_key(key);
    })
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    with_builder(state, |b| {
        let rows = b.selection().len();
        b.focus = if forward {
            b.focus.next(rows)
        } else {
            b.focus.previous(rows)
        };
    })
}

/// "Save the Segment": start a delivery when the draft is complete
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let Some(builder) = state.builder.as_mut() else {
        return UpdateResult::none();
    };

    match builder.begin_submit() {
        Some(payload) => {
            info!(
                "submitting segment {:?} with {} schema(s)",
                payload.segment_name,
                payload.schema.len()
            );
            UpdateResult::action(UpdateAction::SubmitSegment {
                builder_id: builder.id(),
                payload,
            })
        }
        None => {
            debug!(
                "save ignored (submitting: {}, complete: {})",
                builder.is_submitting(),
                builder.can_submit()
            );
            UpdateResult::none()
        }
    }
}

pub fn handle_submitted(
    state: &mut AppState,
    builder_id: BuilderId,
    delivery: Delivery,
) -> UpdateResult {
    info!("segment from {} delivered ({:?})", builder_id, delivery.status);
    state.notifications.success(SAVE_SUCCESS_MESSAGE);

    match state.builder_mut_if(builder_id) {
        Some(builder) => builder.complete_submit(true),
        None => debug!("{} is gone, nothing to reset", builder_id),
    }
    UpdateResult::none()
}

pub fn handle_submit_failed(
    state: &mut AppState,
    builder_id: BuilderId,
    error: &str,
) -> UpdateResult {
    warn!("segment from {} not delivered: {}", builder_id, error);
    state.notifications.error(SAVE_FAILURE_MESSAGE);

    if let Some(builder) = state.builder_mut_if(builder_id) {
        builder.complete_submit(false);
    }
    UpdateResult::none()
}
