//! Segment builder - form state for the "Saving Segment" modal
//!
//! Owns the draft (name + ordered schema selection) and the pending choice,
//! and enforces that the selection only ever holds distinct catalog fields.

mod focus;
mod state;

pub use focus::BuilderFocus;
pub use state::{BuilderId, SegmentBuilderState, SegmentDraft};
