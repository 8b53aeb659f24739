//! Pet facts page entry point.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pet_facts_page::config::Config;
use pet_facts_page::{metrics, server};
use pet_facts_page::utils::shutdown_signal;

/// Web page that merges cat facts and a random dog picture.
#[derive(Parser, Debug)]
#[command(name = "pet-facts-page")]
#[command(about = "Serve a page of cat facts and a random dog picture")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Interface to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("pet_facts_page=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    if let Err(e) = server::run(config, shutdown_signal()).await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
