use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "remote-log")]
#[command(about = "Worker that squares integers and reports to a remote log sink")]
pub struct AppArgs {
    #[arg(long, help = "Run the log sink instead of the worker")]
    pub sink: bool,

    #[arg(long, default_value = "127.0.0.1", help = "Address to bind the HTTP server to")]
    pub host: String,

    #[arg(long, help = "Port to listen on (4002 for the sink, 4001 for the worker)")]
    pub port: Option<u16>,

    #[arg(
        long = "sink-url",
        help = "Ingestion URL of the log sink (or set REMOTE_LOG_SINK_URL); empty disables reporting"
    )]
    pub sink_url: Option<String>,

    #[arg(long, default_value = "InteractiveServer", help = "Name attached to reported events")]
    pub server_name: String,

    #[arg(long, default_value_t = 2000, help = "Delivery timeout for one event, in milliseconds")]
    pub timeout_ms: u64,

    #[arg(long, help = "Read numbers from the terminal as well as over HTTP")]
    pub interactive: bool,

    #[arg(long, default_value = "info", help = "Log filter for diagnostics (RUST_LOG wins)")]
    pub log_level: String,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
