//! segbuild-tui - Terminal UI for Segment Builder
//!
//! This crate provides the ratatui-based interface: a host screen with a
//! launcher, the "Saving Segment" side panel and toast notifications. State
//! and behavior live in segbuild-app; this crate renders it and feeds
//! terminal events back in.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, run_with_sink};
