//! Maintenance gate
//!
//! An edge request handler built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ request id → trace → timeout → maintenance gate ──┐
//!                                                        │            │
//!                                          flag on and   │            │ flag off, or static
//!                                          path not      │            │ asset / maintenance
//!                                          exempt        ▼            │ page / exempt page
//!   ◀──────────────────────────────────── 302 Location:               ▼
//!                                        {origin}/down/maintenance.html
//!   ◀───────────────────────────────────────────────────────── asset store
//!                                                     (directory or upstream)
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use maintenance_gate::check::check_target;
use maintenance_gate::config::{loader, watcher::ConfigWatcher, GateConfig};
use maintenance_gate::http::GateServer;
use maintenance_gate::lifecycle::{wait_for_signal, Shutdown};
use maintenance_gate::observability::init_logging;

#[derive(Parser)]
#[command(name = "maintenance-gate", version)]
#[command(about = "Redirects traffic to a maintenance page or serves static assets", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gate (default)
    Serve,
    /// Show what the gate would do with the given URLs or paths
    Check {
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => loader::default_config()?,
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, cli.config).await,
        Commands::Check { targets } => {
            let mode = config.env().maintenance_mode();
            println!("maintenance mode: {}", mode);
            for target in &targets {
                println!("{}", check_target(mode, target));
            }
            Ok(())
        }
    }
}

async fn serve(
    config: GateConfig,
    config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&config.observability)?;

    tracing::info!("maintenance-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        assets = ?config.assets,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Keep the watcher alive for the lifetime of the server.
    let (_watcher, config_updates) = match &config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path, config.clone());
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = GateServer::new(config)?;
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
