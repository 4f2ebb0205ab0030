//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::segment_builder::{BuilderFocus, SegmentBuilderState};
use crate::state::AppState;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.builder {
        Some(builder) => handle_key_segment_builder(builder, key),
        None => handle_key_launcher(key),
    }
}

/// Host screen: open the modal or quit
fn handle_key_launcher(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('s') => Some(Message::OpenSegmentBuilder),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// "Saving Segment" modal
fn handle_key_segment_builder(builder: &SegmentBuilderState, key: InputKey) -> Option<Message> {
    match key {
        // Back arrow closes from anywhere
        InputKey::Esc => return Some(Message::CloseSegmentBuilder),
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrevious),
        _ => {}
    }

    match builder.focus {
        BuilderFocus::Name => match key {
            InputKey::Char(c) => Some(Message::SegmentNameInput(c)),
            InputKey::Backspace => Some(Message::SegmentNameBackspace),
            InputKey::Enter => Some(Message::FocusNext),
            _ => None,
        },

        BuilderFocus::Row(index) => match key {
            InputKey::Left => Some(Message::CycleSchemaAt {
                index,
                forward: false,
            }),
            InputKey::Right => Some(Message::CycleSchemaAt {
                index,
                forward: true,
            }),
            InputKey::Char('-') | InputKey::Delete => Some(Message::RemoveSchemaAt { index }),
            _ => None,
        },

        BuilderFocus::AddChooser => match key {
            InputKey::Left => Some(Message::CyclePendingSchema { forward: false }),
            InputKey::Right => Some(Message::CyclePendingSchema { forward: true }),
            InputKey::Enter => Some(Message::CommitPendingSchema),
            _ => None,
        },

        BuilderFocus::AddLink => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::CommitPendingSchema),
            _ => None,
        },

        BuilderFocus::Save => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SaveSegment),
            _ => None,
        },

        BuilderFocus::Cancel => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::CloseSegmentBuilder),
            _ => None,
        },
    }
}
