//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use segbuild_client::SegmentSink;
use segbuild_core::prelude::*;
use segbuild_core::SubmissionPayload;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::segment_builder::BuilderId;

/// Execute an action by spawning a background task
///
/// Returns the spawned task so callers (and tests) can await it.
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    sink: Arc<S>,
) -> tokio::task::JoinHandle<()>
where
    S: SegmentSink + Sync + 'static,
{
    match action {
        UpdateAction::SubmitSegment {
            builder_id,
            payload,
        } => tokio::spawn(async move {
            let msg = submit_segment(sink.as_ref(), builder_id, payload).await;
            if let Err(e) = msg_tx.send(msg).await {
                warn!("delivery result for {} dropped: {}", builder_id, e);
            }
        }),
    }
}

/// Deliver one payload and turn the outcome into a message
///
/// Exactly one delivery attempt is made.
pub async fn submit_segment<S>(
    sink: &S,
    builder_id: BuilderId,
    payload: SubmissionPayload,
) -> Message
where
    S: SegmentSink + Sync,
{
    debug!("delivering {} to {}", builder_id, sink.describe());
    match sink.deliver(payload).await {
        Ok(delivery) => Message::SegmentSubmitted {
            builder_id,
            delivery,
        },
        Err(e) => {
            if e.is_recoverable() {
                debug!("{} delivery failed, draft kept: {}", builder_id, e);
            } else {
                error!("{} delivery failed unexpectedly: {}", builder_id, e);
            }
            Message::SegmentSubmitFailed {
                builder_id,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbuild_client::test_utils::StubSink;

    fn payload() -> SubmissionPayload {
        let field = segbuild_core::find_field("age").unwrap();
        SubmissionPayload::from_selection("Adults", [field])
    }

    #[tokio::test]
    async fn test_submit_segment_success() {
        let sink = StubSink::succeeding();
        let msg = submit_segment(&sink, BuilderId(4), payload()).await;

        assert!(matches!(
            msg,
            Message::SegmentSubmitted {
                builder_id: BuilderId(4),
                ..
            }
        ));
        assert_eq!(sink.call_count(), 1);
        assert_eq!(sink.calls()[0].segment_name, "Adults");
    }

    #[tokio::test]
    async fn test_submit_segment_failure() {
        let sink = StubSink::failing("offline");
        let msg = submit_segment(&sink, BuilderId(2), payload()).await;

        match msg {
            Message::SegmentSubmitFailed { builder_id, error } => {
                assert_eq!(builder_id, BuilderId(2));
                assert!(error.contains("offline"));
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(sink.call_count(), 1);
    }

    #[tokio::test]
    async fn test_handle_action_reports_back() {
        let (tx, mut rx) = mpsc::channel(4);
        let sink = Arc::new(StubSink::succeeding());

        let task = handle_action(
            UpdateAction::SubmitSegment {
                builder_id: BuilderId(1),
                payload: payload(),
            },
            tx,
            sink.clone(),
        );
        task.await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::SegmentSubmitted { .. })
        ));
        assert_eq!(sink.call_count(), 1);
    }
}
