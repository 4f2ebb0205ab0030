//! Headless mode - submit one segment from the command line
//!
//! Builds the draft through the same [`SegmentBuilderState`] the modal uses,
//! so the name and selection rules are identical, then delivers it once and
//! reports progress as NDJSON on stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"payload_ready","payload":{"segment_name":"VIP","schema":[{"first_name":"First Name"}]},"timestamp":1704700001000}
//! {"event":"segment_saved","endpoint":"https://hooks.example/segments","status":200,"timestamp":1704700001200}
//! ```

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use segbuild_app::notifications::{SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE};
use segbuild_app::{BuilderId, SegmentBuilderState};
use segbuild_client::{Delivery, SegmentSink};
use segbuild_core::prelude::*;
use segbuild_core::SubmissionPayload;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The draft was accepted and is about to be sent
    PayloadReady {
        payload: SubmissionPayload,
        timestamp: i64,
    },

    /// The endpoint took the segment
    SegmentSaved {
        endpoint: String,
        status: Option<u16>,
        message: String,
        timestamp: i64,
    },

    /// Delivery failed
    SegmentFailed {
        endpoint: String,
        error: String,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json).context("writing headless event")?;
        out.flush().context("flushing headless output")
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn payload_ready(payload: SubmissionPayload) -> Self {
        Self::PayloadReady {
            payload,
            timestamp: Self::now(),
        }
    }

    pub fn segment_saved(endpoint: String, delivery: Delivery) -> Self {
        Self::SegmentSaved {
            endpoint,
            status: delivery.status,
            message: SAVE_SUCCESS_MESSAGE.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn segment_failed(endpoint: String, error: &Error) -> Self {
        Self::SegmentFailed {
            endpoint,
            error: error.to_string(),
            message: SAVE_FAILURE_MESSAGE.to_string(),
            timestamp: Self::now(),
        }
    }
}

/// Build a submittable draft from a name and schema keys, in order
///
/// Unknown or repeated keys are rejected, as is an incomplete draft.
pub fn build_payload<K: AsRef<str>>(name: &str, keys: &[K]) -> Result<SubmissionPayload> {
    let mut builder = SegmentBuilderState::new(BuilderId(0));
    builder.set_name(name);
    for key in keys {
        builder.select_pending(key.as_ref())?;
        builder.commit_pending();
    }
    builder.begin_submit().ok_or(Error::IncompleteSegment)
}

/// Deliver one segment and report it on `out`
pub async fn submit<S, W>(sink: &S, payload: SubmissionPayload, out: &mut W) -> Result<Delivery>
where
    S: SegmentSink + Sync,
    W: Write,
{
    let endpoint = sink.describe();
    HeadlessEvent::payload_ready(payload.clone()).emit_to(out)?;

    info!(
        "Submitting segment {:?} ({} schemas) to {}",
        payload.segment_name,
        payload.schema.len(),
        endpoint
    );

    match sink.deliver(payload).await {
        Ok(delivery) => {
            HeadlessEvent::segment_saved(endpoint, delivery).emit_to(out)?;
            Ok(delivery)
        }
        Err(e) => {
            error!("Segment delivery failed: {}", e);
            HeadlessEvent::segment_failed(endpoint, &e).emit_to(out)?;
            Err(e)
        }
    }
}
