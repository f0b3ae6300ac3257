use clap::Parser;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

/// Mock HTTP server producing predictable latency and error patterns
#[derive(Parser, Debug)]
#[command(name = "workload_mock_server", version, about)]
struct Cli {
    /// Configuration file path, without extension
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Listen port, overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = config::Config::load_from(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    // Create the Tokio runtime, sizing worker threads from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Arc::new(logger::Logger::from_config(&cfg)?);

    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    logger.log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, Arc::clone(&logger))?);

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown), Arc::clone(&logger))?;

    server::start_server_loop(listener, state, Arc::new(AtomicUsize::new(0)), shutdown).await;

    logger.log_info("Server stopped");
    Ok(())
}
