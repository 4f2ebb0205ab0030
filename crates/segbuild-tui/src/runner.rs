//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use segbuild_app::config::Settings;
use segbuild_app::process::process_message;
use segbuild_app::signals::spawn_signal_handler;
use segbuild_app::{AppState, Message};
use segbuild_client::{SegmentSink, WebhookClient};
use segbuild_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI, delivering saved segments to the configured webhook
pub async fn run(settings: Settings) -> Result<()> {
    // Fail on a bad endpoint before taking over the terminal
    let sink = Arc::new(WebhookClient::new(&settings.webhook.options())?);
    info!("Segments will be posted to {}", sink.endpoint());

    run_with_sink(settings, sink).await
}

/// Run the TUI against any sink
pub async fn run_with_sink<S>(settings: Settings, sink: Arc<S>) -> Result<()>
where
    S: SegmentSink + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    state.endpoint_label = sink.describe();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signals = spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &sink);

    signals.abort();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    sink: &Arc<S>,
) -> Result<()>
where
    S: SegmentSink + Sync + 'static,
{
    while !state.should_quit() {
        // Delivery results, signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, sink);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("drawing frame")?;

        if let Some(message) = event::poll().context("polling terminal events")? {
            process_message(state, message, &msg_tx, sink);
        }
    }

    Ok(())
}
