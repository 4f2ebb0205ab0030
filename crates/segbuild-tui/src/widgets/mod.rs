//! Custom widgets for the segment builder TUI

mod launcher;
pub mod modal_overlay;
mod segment_modal;
mod toast;

pub use launcher::{Launcher, LAUNCH_BUTTON};
pub use segment_modal::*;
pub use toast::{toast_rects, ToastStack};
