//! Message types for the application (TEA pattern)

use segbuild_client::Delivery;

use crate::input_key::InputKey;
use crate::segment_builder::BuilderId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Host container
    // ─────────────────────────────────────────────────────────
    /// Show the "Saving Segment" modal (no-op if already open)
    OpenSegmentBuilder,
    /// Hide the modal and discard its draft (no-op if closed)
    CloseSegmentBuilder,

    // ─────────────────────────────────────────────────────────
    // Segment builder
    // ─────────────────────────────────────────────────────────
    /// Replace the segment name verbatim
    SegmentNameChanged { name: String },
    SegmentNameInput(char),
    SegmentNameBackspace,

    /// Set the "add schema" choice; empty clears it
    SelectPendingSchema { key: String },
    CyclePendingSchema { forward: bool },
    /// Append the pending choice ("+ Add new schema")
    CommitPendingSchema,

    EditSchemaAt { index: usize, key: String },
    CycleSchemaAt { index: usize, forward: bool },
    RemoveSchemaAt { index: usize },
    RemoveSchema { key: String },

    FocusNext,
    FocusPrevious,

    /// "Save the Segment" pressed
    SaveSegment,

    // ─────────────────────────────────────────────────────────
    // Delivery results
    // ─────────────────────────────────────────────────────────
    /// The endpoint received the segment
    SegmentSubmitted {
        builder_id: BuilderId,
        delivery: Delivery,
    },
    /// The segment could not be delivered
    SegmentSubmitFailed { builder_id: BuilderId, error: String },
}
