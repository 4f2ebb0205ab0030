//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Selection Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown schema key: {key:?}")]
    UnknownSchema { key: String },

    #[error("Schema already selected: {key}")]
    DuplicateSchema { key: String },

    #[error("Selection index {index} out of range (len {len})")]
    SelectionIndex { index: usize, len: usize },

    #[error("Segment name and at least one schema are required")]
    IncompleteSegment,

    // ─────────────────────────────────────────────────────────────
    // Delivery Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Endpoint rejected segment with HTTP {status}")]
    EndpointStatus { status: u16 },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_schema(key: impl Into<String>) -> Self {
        Self::UnknownSchema { key: key.into() }
    }

    pub fn duplicate_schema(key: impl Into<String>) -> Self {
        Self::DuplicateSchema { key: key.into() }
    }

    pub fn selection_index(index: usize, len: usize) -> Self {
        Self::SelectionIndex { index, len }
    }

    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Delivery failures leave the draft intact so the user can retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::EndpointStatus { .. }
                | Error::Config { .. }
                | Error::IncompleteSegment
        )
    }

    /// Selection invariant violations are programming errors, never user input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Error::UnknownSchema { .. } | Error::DuplicateSchema { .. } | Error::SelectionIndex { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
