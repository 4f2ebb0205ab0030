//! Application state (Model in TEA pattern)
//!
//! `AppState` is the host container: it owns the builder slot (modal visible
//! when occupied), the toast queue and the loaded settings.

use crate::config::Settings;
use crate::notifications::NotificationQueue;
use crate::segment_builder::{BuilderId, SegmentBuilderState};

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Host screen with the "Save segment" launcher
    Launcher,
    /// "Saving Segment" modal on top of the host screen
    SegmentBuilder,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Open builder, if any
    pub builder: Option<SegmentBuilderState>,

    /// Toasts currently on screen
    pub notifications: NotificationQueue,

    /// Where segments are sent, for the footer
    pub endpoint_label: String,

    next_builder_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            notifications: NotificationQueue::new(&settings.notifications),
            endpoint_label: settings.webhook.url.clone(),
            settings,
            builder: None,
            next_builder_id: 1,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.builder.is_some() {
            UiMode::SegmentBuilder
        } else {
            UiMode::Launcher
        }
    }

    pub fn is_builder_open(&self) -> bool {
        self.builder.is_some()
    }

    /// Open a fresh builder unless one is already open
    pub fn open_builder(&mut self) -> BuilderId {
        if let Some(builder) = &self.builder {
            return builder.id();
        }
        let id = BuilderId(self.next_builder_id);
        self.next_builder_id += 1;
        self.builder = Some(SegmentBuilderState::new(id));
        tracing::debug!("opened segment builder {}", id);
        id
    }

    /// Drop the open builder and its draft, if any
    pub fn close_builder(&mut self) {
        if let Some(builder) = self.builder.take() {
            tracing::debug!("closed segment builder {}", builder.id());
        }
    }

    /// The open builder, if it is the one identified by `id`
    pub fn builder_mut_if(&mut self, id: BuilderId) -> Option<&mut SegmentBuilderState> {
        self.builder.as_mut().filter(|b| b.id() == id)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }
}
