//! Segment Builder - build an audience segment and post it to a webhook
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use segbuild_app::config::{init_config_dir, load_settings};
use segbuild_core::prelude::*;

/// Segment Builder - build an audience segment and post it to a webhook
#[derive(Parser, Debug)]
#[command(name = "segbuild")]
#[command(about = "A terminal form for building and submitting audience segments", long_about = None)]
struct Args {
    /// Directory holding `.segbuild/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Override the webhook URL from the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Write a default `.segbuild/config.toml` and exit
    #[arg(long)]
    init: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one segment without the TUI (NDJSON events on stdout)
    Submit {
        /// Segment name
        #[arg(long)]
        name: String,

        /// Schema key to include, in order (repeatable)
        #[arg(long = "schema", value_name = "KEY", required = true)]
        schema: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    segbuild_core::logging::init()?;

    let args = Args::parse();

    let base_path = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = init_config_dir(&base_path)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    let mut settings = load_settings(&base_path);
    if let Some(url) = args.endpoint {
        info!("Webhook URL overridden from the command line");
        settings.webhook.url = url;
    }

    match args.command {
        Some(Command::Submit { name, schema }) => {
            segment_builder::run_headless(settings, &name, &schema).await?
        }
        None => segment_builder::run(settings).await?,
    }

    Ok(())
}
