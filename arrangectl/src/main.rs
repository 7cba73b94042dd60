//! `arrangectl`: sort directory listings and manage sort presets.

mod cli;
mod commands;

use anyhow::Result;
use arrange_config::ConfigLoader;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut load = ConfigLoader::new()
        .with_explicit_path(cli.config.clone())
        .load()?;
    if let Some(path) = cli.presets_file {
        load.config.presets_file = path;
    }

    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| load.config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        source = %load.source,
        presets_file = %load.config.presets_file.display(),
        "configuration resolved"
    );

    match cli.command {
        Command::Sort(args) => commands::sort(&load, args).await,
        Command::Presets { action } => commands::presets(&load, action).await,
        Command::Config => commands::config(&load),
    }
}
