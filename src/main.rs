use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use todod::{config::AppConfig, rest, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(name = "todod", about = "In-memory ToDo task service with a REST API", version)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "TODOD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TODOD_BIND")]
    bind_address: Option<String>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, env = "TODOD_LOG")]
    log: Option<String>,

    /// Path to config.toml (default: ./config.toml)
    #[arg(long, env = "TODOD_CONFIG")]
    config: Option<std::path::PathBuf>,
}

fn init_tracing(log: &str, format: &str) {
    if format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(log).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(log).compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(args.port, args.bind_address, args.log, args.config);
    init_tracing(&config.log, &config.log_format);

    info!(
        app_name = %config.app_name,
        debug = config.debug,
        "starting todod v{}",
        env!("CARGO_PKG_VERSION")
    );

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx).await
}
