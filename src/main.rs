//! The main entry point for the remote-log demo.
mod app;
mod calculator;
mod cli;
mod logging;
mod remote;
mod types;
mod web;

use anyhow::Result;

/// The main function of the application.
///
/// Starts either the log sink or the worker, depending on command-line
/// arguments.
///
/// # Errors
///
/// Returns an error if the selected service fails to start or stops with a
/// critical error.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
