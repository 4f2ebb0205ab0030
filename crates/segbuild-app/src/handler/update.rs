//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, segment_builder, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let expired = state.notifications.expire(Local::now());
            if expired > 0 {
                tracing::trace!("expired {} notification(s)", expired);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Host container
        // ─────────────────────────────────────────────────────────
        Message::OpenSegmentBuilder => {
            state.open_builder();
            UpdateResult::none()
        }

        Message::CloseSegmentBuilder => {
            state.close_builder();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Segment builder
        // ─────────────────────────────────────────────────────────
        Message::SegmentNameChanged { name } => segment_builder::handle_set_name(state, name),
        Message::SegmentNameInput(c) => segment_builder::handle_name_input(state, c),
        Message::SegmentNameBackspace => segment_builder::handle_name_backspace(state),

        Message::SelectPendingSchema { key } => segment_builder::handle_select_pending(state, &key),
        Message::CyclePendingSchema { forward } => {
            segment_builder::handle_cycle_pending(state, forward)
        }
        Message::CommitPendingSchema => segment_builder::handle_commit_pending(state),

        Message::EditSchemaAt { index, key } => segment_builder::handle_edit_at(state, index, &key),
        Message::CycleSchemaAt { index, forward } => {
            segment_builder::handle_cycle_row(state, index, forward)
        }
        Message::RemoveSchemaAt { index } => segment_builder::handle_remove_at(state, index),
        Message::RemoveSchema { key } => segment_builder::handle_remove_by_key(state, &key),

        Message::FocusNext => segment_builder::handle_focus(state, true),
        Message::FocusPrevious => segment_builder::handle_focus(state, false),

        Message::SaveSegment => segment_builder::handle_save(state),

        // ─────────────────────────────────────────────────────────
        // Delivery results
        // ─────────────────────────────────────────────────────────
        Message::SegmentSubmitted {
            builder_id,
            delivery,
        } => segment_builder::handle_submitted(state, builder_id, delivery),

        Message::SegmentSubmitFailed { builder_id, error } => {
            segment_builder::handle_submit_failed(state, builder_id, &error)
        }
    }
}
