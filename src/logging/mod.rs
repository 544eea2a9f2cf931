//! Logging for the binary itself and rendering of received log events.
//!
//! Diagnostics of either process go through `tracing` to stderr. Lines the
//! sink renders from received events go to a `LineWriter`, stdout by default.
pub mod output;
pub mod render;

pub use output::{LineWriter, StdoutWriter};
pub use render::render_line;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn configure_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
