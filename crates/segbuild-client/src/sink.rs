//! Segment sink abstraction
//!
//! A sink accepts one [`SubmissionPayload`] and reports whether it reached
//! the other side. The TUI uses the HTTP webhook implementation; tests use
//! [`crate::test_utils::StubSink`].

use segbuild_core::prelude::*;
use segbuild_core::SubmissionPayload;

/// Outcome of a completed delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status returned by the endpoint; `None` for transports without one
    pub status: Option<u16>,
}

impl Delivery {
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Whether the endpoint answered with a non-2xx status
    pub fn is_error_status(&self) -> bool {
        self.status.is_some_and(|s| !(200..300).contains(&s))
    }
}

/// Destination for saved segments
///
/// Exactly one call is made per accepted submission; implementations must
/// not retry on their own.
#[trait_variant::make(SegmentSink: Send)]
pub trait LocalSegmentSink {
    /// Deliver a payload, resolving once the transport call completes
    async fn deliver(&self, payload: SubmissionPayload) -> Result<Delivery>;

    /// Short description of the destination, for logs and the UI
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_detection() {
        assert!(!Delivery::with_status(200).is_error_status());
        assert!(!Delivery::with_status(204).is_error_status());
        assert!(Delivery::with_status(404).is_error_status());
        assert!(Delivery::with_status(500).is_error_status());
        assert!(!Delivery { status: None }.is_error_status());
    }
}
