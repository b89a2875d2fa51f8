use std::path::PathBuf;

use civils_security::http::{self, AppState};
use civils_security::{AppConfig, telemetry};
use clap::Parser;
use tokio::net::TcpListener;

/// Serves the civils API behind its stateless CORS/security pipeline.
#[derive(Debug, Parser)]
#[command(name = "civils-security", version, about)]
struct Cli {
    /// TOML configuration file; development defaults apply when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Overrides the bind address, e.g. 0.0.0.0:8080.
    #[arg(long)]
    bind: Option<String>,

    /// Print the resolved security policy and exit.
    #[arg(long)]
    print_policy: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    telemetry::init(&config.logging.filter)?;

    let security = config.security_policy()?;
    if cli.print_policy {
        println!("{:#?}", config.cors.to_policy());
        println!("{security:#?}");
        return Ok(());
    }

    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        authorization = ?security.authorization_rule(),
        "Listening for connections"
    );

    let app = http::router(AppState::new(security).with_scheme(config.server.scheme));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
