//! Todoist MCP Server - Main Entry Point
//!
//! This is the main entry point for the Todoist MCP server application.
//! The actual implementation is in the `todoist_mcp` library.

use anyhow::{Context, Result};
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todoist_mcp::{ClientConfig, FileConfig, TodoistServerHandler};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Todoist MCP Server - Todoist task management via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Todoist API token
    #[arg(long, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    token: String,

    /// API root URL [default: https://api.todoist.com/api/v1]
    #[arg(long, env = "TODOIST_API_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Optional TOML config file with an [api] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.token.trim().is_empty() {
        anyhow::bail!("TODOIST_API_TOKEN must not be empty");
    }

    let file = args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()
        .context("Failed to load config file")?;
    let config = ClientConfig::resolve(file.as_ref(), args.base_url, args.timeout_secs);

    info!(base_url = %config.base_url, timeout = ?config.timeout, "starting Todoist MCP server");
    let handler = TodoistServerHandler::new(&args.token, &config)?;
    serve_stdio(handler).await?;
    Ok(())
}
