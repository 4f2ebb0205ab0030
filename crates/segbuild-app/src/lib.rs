//! segbuild-app - Application state and orchestration for Segment Builder
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! segment modal: messages go through [`handler::update`], which mutates
//! [`AppState`] and may ask for a background delivery via [`UpdateAction`].
//! It also owns configuration loading and toast notifications.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod segment_builder;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifications::{Notification, NotificationKind, NotificationQueue, Notifier};
pub use segment_builder::{BuilderFocus, BuilderId, SegmentBuilderState, SegmentDraft};
pub use state::{AppPhase, AppState, UiMode};
