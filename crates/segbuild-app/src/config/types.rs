//! Configuration types for Segment Builder
//!
//! Defines:
//! - `Settings` - Global application settings (`.segbuild/config.toml`)
//! - `WebhookSettings` - Where and how segments are delivered
//! - `NotificationSettings` - Toast duration, placement and capacity

use std::time::Duration;

use segbuild_client::WebhookOptions;
use serde::{Deserialize, Serialize};

/// Endpoint used when no configuration overrides it
pub const DEFAULT_WEBHOOK_URL: &str = "https://webhook.site/your-custom-url";

/// Application settings (.segbuild/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub webhook: WebhookSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Delivery endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookSettings {
    /// URL the segment JSON is POSTed to
    #[serde(default = "default_webhook_url")]
    pub url: String,

    /// Request timeout; absent means no timeout
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Treat non-2xx responses as failed deliveries
    #[serde(default)]
    pub require_success_status: bool,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_ms: None,
            require_success_status: false,
        }
    }
}

impl WebhookSettings {
    /// Client options for these settings
    pub fn options(&self) -> WebhookOptions {
        let mut options = WebhookOptions::new(self.url.clone())
            .with_required_success_status(self.require_success_status);
        if let Some(ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(ms));
        }
        options
    }
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

/// Corner of the screen toasts are anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// Toast settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// How long a toast stays visible
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    #[serde(default)]
    pub position: ToastPosition,

    /// Older toasts are dropped beyond this many
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            position: ToastPosition::default(),
            max_visible: default_max_visible(),
        }
    }
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_max_visible() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(settings.webhook.timeout_ms, None);
        assert!(!settings.webhook.require_success_status);
        assert_eq!(settings.notifications.duration_ms, 3000);
        assert_eq!(settings.notifications.position, ToastPosition::TopRight);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [webhook]
            url = "http://localhost:9000/segments"

            [notifications]
            position = "bottom_left"
            "#,
        )
        .unwrap();

        assert_eq!(settings.webhook.url, "http://localhost:9000/segments");
        assert_eq!(settings.notifications.position, ToastPosition::BottomLeft);
        assert_eq!(settings.notifications.duration_ms, 3000);
        assert_eq!(settings.notifications.max_visible, 3);
    }

    #[test]
    fn test_webhook_options() {
        let settings = WebhookSettings {
            url: "http://localhost/hook".into(),
            timeout_ms: Some(1500),
            require_success_status: true,
        };
        let options = settings.options();
        assert_eq!(options.url, "http://localhost/hook");
        assert_eq!(options.timeout, Some(Duration::from_millis(1500)));
        assert!(options.require_success_status);
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
