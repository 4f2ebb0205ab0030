//! Configuration file parsing for Segment Builder
//!
//! Supports:
//! - `.segbuild/config.toml` - Webhook and notification settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
