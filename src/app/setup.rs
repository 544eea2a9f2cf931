//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::logging::configure_logging;
use crate::remote::DispatcherConfig;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::net::TcpListener;

pub const DEFAULT_SINK_PORT: u16 = 4002;
pub const DEFAULT_WORKER_PORT: u16 = 4001;
pub const DEFAULT_SINK_URL: &str = "http://localhost:4002/log";
pub const SINK_URL_ENV: &str = "REMOTE_LOG_SINK_URL";

/// Everything a mode needs to start serving.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// The bound HTTP listener.
    pub listener: TcpListener,
    /// Settings for the worker's dispatcher. Unused by the sink.
    pub dispatcher: DispatcherConfig,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Resolves the sink URL and builds the dispatcher settings.
/// 3. Binds the HTTP listener.
/// 4. Prints a start banner.
///
/// # Errors
///
/// This function will return an error if the listener cannot be bound.
pub async fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_logging(&args.log_level);

    let sink_url = resolve_sink_url(&args, std::env::var(SINK_URL_ENV).ok());
    let dispatcher = DispatcherConfig::new(sink_url, args.server_name.clone())
        .with_timeout(Duration::from_millis(args.timeout_ms));

    let port = args.port.unwrap_or(if args.sink {
        DEFAULT_SINK_PORT
    } else {
        DEFAULT_WORKER_PORT
    });
    let addr = format!("{}:{}", args.host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    print_start_banner(&args, &addr, &dispatcher);

    Ok(PreparedApp {
        args,
        listener,
        dispatcher,
    })
}

/// Picks the sink URL: command line first, then the environment, then the
/// default. An explicitly empty value is kept and disables reporting.
fn resolve_sink_url(args: &AppArgs, from_env: Option<String>) -> String {
    args.sink_url
        .clone()
        .or(from_env)
        .unwrap_or_else(|| DEFAULT_SINK_URL.to_string())
}

fn print_start_banner(args: &AppArgs, addr: &str, dispatcher: &DispatcherConfig) {
    if args.sink {
        println!("Starting Logging Server");
        println!("Listening on: http://{}", addr);
        println!("Ingestion: POST http://{}/log", addr);
    } else {
        println!("Starting Power of 2 Calculator");
        println!("Listening on: http://{}", addr);
        println!("Server name: {}", dispatcher.server_name);
        if dispatcher.endpoint.trim().is_empty() {
            println!("Remote logging: disabled");
        } else {
            println!("Remote logging: {}", dispatcher.endpoint);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn sink_url_precedence() {
        let args = AppArgs::try_parse_from(["remote-log"]).unwrap();
        assert_eq!(resolve_sink_url(&args, None), DEFAULT_SINK_URL);
        assert_eq!(
            resolve_sink_url(&args, Some("http://env/log".into())),
            "http://env/log"
        );

        let args = AppArgs::try_parse_from(["remote-log", "--sink-url", "http://cli/log"]).unwrap();
        assert_eq!(
            resolve_sink_url(&args, Some("http://env/log".into())),
            "http://cli/log"
        );

        let args = AppArgs::try_parse_from(["remote-log", "--sink-url", ""]).unwrap();
        assert_eq!(resolve_sink_url(&args, Some("http://env/log".into())), "");
    }
}
