//! `todo`: terminal front end for the todo API.
//!
//! Renders the form and the list as text and reads commands from stdin.
//! Failed requests print a one-line notification to stderr; details go to
//! the log (`RUST_LOG`, default `info`).

mod config;
mod repl;
mod transport;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use todo_core::{view, ClientConfig, TodoClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Args;
use crate::transport::ReqwestTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::new(args.api_url.as_str()).context("invalid API base URL")?;
    let transport = ReqwestTransport::new(args.timeout()).context("failed to build HTTP client")?;
    tracing::info!(base_url = config.base_url(), "starting");

    let client = TodoClient::new(&config, transport);
    if let Err(e) = client.on_mount().await {
        eprintln!("! {e}");
    }
    print!("{}", view::render(&client.snapshot().await));
    println!("(type `help` for commands)");

    repl::run(&client, BufReader::new(tokio::io::stdin()))
        .await
        .context("failed to read input")
}
