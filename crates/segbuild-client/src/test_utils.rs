//! Test utilities for segment delivery
//!
//! Provides a [`StubSink`] that records every payload it receives and
//! answers with a canned outcome.

use std::sync::{Arc, Mutex};

use segbuild_core::prelude::*;
use segbuild_core::SubmissionPayload;

use crate::sink::{Delivery, SegmentSink};

/// Canned answer for [`StubSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOutcome {
    /// Completes with the given HTTP status
    Respond(u16),
    /// Fails as if the network were unreachable
    NetworkError(String),
}

/// In-memory sink for tests
///
/// Clones share the same call log, so a test can keep one handle while the
/// app owns another.
#[derive(Debug, Clone)]
pub struct StubSink {
    outcome: StubOutcome,
    calls: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl StubSink {
    /// Sink that answers every delivery with HTTP 200
    pub fn succeeding() -> Self {
        Self::with_outcome(StubOutcome::Respond(200))
    }

    /// Sink that fails every delivery with a transport error
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(StubOutcome::NetworkError(message.to_string()))
    }

    pub fn with_outcome(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Payloads received so far, in order
    pub fn calls(&self) -> Vec<SubmissionPayload> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl SegmentSink for StubSink {
    async fn deliver(&self, payload: SubmissionPayload) -> Result<Delivery> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(payload);
        }
        match &self.outcome {
            StubOutcome::Respond(status) => Ok(Delivery::with_status(*status)),
            StubOutcome::NetworkError(message) => Err(Error::transport(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "stub://segments".to_string()
    }
}
