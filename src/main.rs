//! IDMS site server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use idms_site::api::{AppState, create_router};
use idms_site::config::ConfigLoader;

/// Serve the IDMS marketing site.
#[derive(Debug, Parser)]
#[command(name = "idms-site", version, about)]
struct Cli {
    /// Directory containing site.yaml and images.yaml
    #[arg(long, env = "IDMS_CONFIG_DIR", default_value = "./config/idms")]
    config: PathBuf,

    /// Override the configured listen address
    #[arg(long, env = "IDMS_BIND")]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("idms_site=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match ConfigLoader::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %cli.config.display(), error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Some(bind) = cli.bind {
        config = config.with_bind_address(bind);
    }
    let address = config.bind_address();

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%address, "Starting IDMS site");

    if let Err(err) = axum::serve(listener, create_router(state)).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
