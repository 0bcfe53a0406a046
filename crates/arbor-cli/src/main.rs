//! Arbor CLI Application
//!
//! Command-line interface and MCP server for the arbor task tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use arbor_core::{params::ListTasks, TrackerBuilder};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, ArborMcpServer};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize task tracker")?;

    info!("Arbor started with database {}", tracker.database_path().display());

    match command {
        Some(Commands::Serve) => {
            info!("Starting Arbor MCP server");
            run_stdio_server(ArborMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        Some(command) => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .handle_command(command)
                .await
        }
        None => {
            Cli::new(tracker, TerminalRenderer::new(!no_color))
                .list_tasks(&ListTasks {
                    roots_only: true,
                    ..Default::default()
                })
                .await
        }
    }
}
