//! Segment Builder
//!
//! A terminal form for naming an audience segment, picking the schema
//! fields that define it and posting the result to a webhook. The TUI lives
//! in `segbuild-tui`; this crate adds the command-line entry points.

pub mod headless;

use segbuild_app::config::Settings;
use segbuild_client::WebhookClient;
use segbuild_core::prelude::*;

pub use segbuild_tui::run;

/// Submit one segment without the TUI, reporting NDJSON events on stdout
pub async fn run_headless<K: AsRef<str>>(
    settings: Settings,
    name: &str,
    keys: &[K],
) -> Result<()> {
    let payload = headless::build_payload(name, keys)?;
    let sink = WebhookClient::new(&settings.webhook.options())?;

    let mut stdout = std::io::stdout();
    headless::submit(&sink, payload, &mut stdout).await?;
    Ok(())
}
