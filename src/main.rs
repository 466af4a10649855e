//! Task Board MCP Server - Main Entry Point
//!
//! The actual implementation is in the `taskboard_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use std::time::Duration;
use taskboard_mcp::config::{BoardConfig, DEFAULT_DUE_SOON_DAYS, SameColumnMove};
use taskboard_mcp::BoardServerHandler;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Task Board MCP Server - kanban board over Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file to seed the board from (default: built-in sample board)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Days ahead of today within which a task is flagged as due soon
    #[arg(long, default_value_t = DEFAULT_DUE_SOON_DAYS)]
    due_soon_days: i64,

    /// What dropping a task onto its own column does
    #[arg(long, value_enum, default_value_t = SameColumnMove::Ignore)]
    same_column: SameColumnMove,

    /// Simulated delay before a create-task submission completes, in milliseconds
    #[arg(long, default_value_t = 1000)]
    submit_delay_ms: u64,
}

impl From<Args> for BoardConfig {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            due_soon_days: args.due_soon_days,
            same_column: args.same_column,
            submit_delay: Duration::from_millis(args.submit_delay_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "taskboard_mcp=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let handler = BoardServerHandler::new(args.into())?;
    serve_stdio(handler).await?;
    Ok(())
}
