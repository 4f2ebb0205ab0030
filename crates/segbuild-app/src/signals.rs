//! Shutdown on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! The terminal is in raw mode while the TUI runs, so Ctrl+C normally
//! arrives as a key. These handlers cover `kill` and signals sent while the
//! terminal is not ours.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use segbuild_core::prelude::*;

/// Signal that asked the app to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

/// Listen for the first shutdown signal and turn it into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(signal) => {
                info!("{:?} received, closing", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("event loop already stopped");
                }
            }
            // Registration failures surface as Error::Io
            Err(e) => error!("Cannot listen for shutdown signals: {}", e),
        }
    })
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_handler_waits_quietly_until_signalled() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }
}
