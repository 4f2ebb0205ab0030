//! Message processing
//!
//! Runs a message (and its follow-ups) through the TEA update function and
//! dispatches any resulting action to the background.

use std::sync::Arc;

use tokio::sync::mpsc;

use segbuild_client::SegmentSink;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<S>,
) where
    S: SegmentSink + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), sink.clone());
        }

        msg = result.message;
    }
}
