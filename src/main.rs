mod cli;
mod config;
mod error;
mod roster;
mod sync;

use clap::Parser;
use teammates::TeammatesClient;
use tracing::info;

use crate::config::RunConfig;
use crate::error::AppError;
use crate::roster::Roster;
use crate::sync::SyncEngine;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv(); // load .env if present

    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli).await {
        tracing::error!(error = %e, "teammate-sync fatal error");
        std::process::exit(1);
    }
}

/// Validate flags, load the roster, then run each selected operation in
/// turn: no-SSO listing, full listing, create sweep, update sweep.
async fn run(cli: &cli::Cli) -> Result<(), AppError> {
    let config = RunConfig::from_cli(cli)?;

    let roster = Roster::load(&config.config_path)?;
    info!(
        path = %config.config_path.display(),
        groups = roster.groups.len(),
        users = roster.user_count(),
        "roster loaded"
    );

    let client = TeammatesClient::new(config.api.clone())?;
    info!(api = client.base_url(), "teammates client ready");
    let engine = SyncEngine::new(&client, &roster);

    if config.actions.get_all_no_sso {
        engine.list_without_sso().await?;
    }

    if config.actions.get_all {
        engine.list_all().await?;
    }

    if config.actions.create {
        engine.sync_create().await?;
    }

    if config.actions.update {
        engine.sync_update().await?;
    }

    Ok(())
}
