//! tcpfan binary: parse flags, set up logging, run the relay until killed.

use clap::Parser;

use tcpfan::server::{RelayConfig, RelayServer, DEFAULT_PEER_PORT, DEFAULT_PORT};

/// CLI arguments for tcpfan
#[derive(Parser, Debug)]
#[command(name = "tcpfan")]
#[command(version)]
#[command(about = "tcpfan is a compact testing tool that relays data between two groups of TCP clients")]
#[command(long_about = "
tcpfan listens on two ports and forwards any data received on one port to
every client connected on the other, printing each payload as a hex table.
Useful for debugging embedded devices that speak serial-over-TCP.

A payload of exactly 7 bytes is treated as a heartbeat: it is echoed to the
sender's own port and the sending connection is closed.
")]
struct CliArgs {
    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT as u32)]
    port: u32,

    /// Peer port to relay data to (also listened on)
    #[arg(short = 'P', long, default_value_t = DEFAULT_PEER_PORT as u32)]
    peer_port: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    init_tracing(&args);

    let config = match RelayConfig::from_ports(args.port, args.peer_port) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        peer_port = config.peer_port,
        "Starting tcpfan v{}",
        env!("CARGO_PKG_VERSION")
    );

    let server = RelayServer::new(config);

    tokio::select! {
        _ = server.run() => {
            // Both listeners ended, which only happens when both binds failed.
            tracing::error!("All listeners stopped");
            std::process::exit(1);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(args: &CliArgs) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
