//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each UI mode
//! - `segment_builder`: Segment modal handlers and delivery results

pub(crate) mod keys;
pub(crate) mod segment_builder;
pub(crate) mod update;


use segbuild_core::SubmissionPayload;

use crate::message::Message;
use crate::segment_builder::BuilderId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Deliver a segment in the background and report back with
    /// `SegmentSubmitted` or `SegmentSubmitFailed`
    SubmitSegment {
        builder_id: BuilderId,
        payload: SubmissionPayload,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
