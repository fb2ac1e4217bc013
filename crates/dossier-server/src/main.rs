//! dossier server binary.
//!
//! Reads `dossier.toml` (or the path given with `--config`) plus environment
//! overrides, seeds an in-memory store, starts the keepalive task when an
//! external URL is configured, and serves the JSON API over HTTP.

use std::{path::PathBuf, time::Instant};

use anyhow::Context as _;
use clap::Parser;
use dossier_server::{AppState, Keepalive, ServerConfig};
use dossier_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Dossier record service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "dossier.toml")]
  config: PathBuf,

  /// Start with an empty store instead of the sample records.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let started = Instant::now();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = if cli.no_seed {
    MemoryStore::new()
  } else {
    MemoryStore::seeded()
  };

  if let Some(keepalive) =
    Keepalive::from_config(&server_cfg).context("failed to set up keepalive")?
  {
    tracing::info!(
      url = keepalive.base_url(),
      interval_secs = server_cfg.ping_interval_secs,
      "starting keepalive task"
    );
    keepalive.spawn();
  }

  let address = server_cfg.address();
  let state = AppState::started_at(store, server_cfg, started);
  let app = dossier_server::router(state);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
