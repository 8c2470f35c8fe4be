//! doclens - answer questions about business documents from the command line.
//!
//! # Configuration
//!
//! Settings are read from `--config <file>`, else `~/.doclens/config.toml`
//! when it exists, else `DOCLENS_*` environment variables (a `.env` file in
//! the working directory is loaded first). Logs go to stderr; set
//! `RUST_LOG` to change the level.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs to stderr, results to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    commands::run(cli.command, config, cli.json).await
}
