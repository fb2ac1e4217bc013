//! Liveness endpoints: `GET /ping` and `GET /health`.
//!
//! Both are cheap, idempotent and safe for the keepalive task to hit.

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use dossier_api::ApiError;
use dossier_core::store::SuspectStore;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Ping {
  pub status:         &'static str,
  pub timestamp:      DateTime<Utc>,
  pub environment:    &'static str,
  pub suspects_count: usize,
}

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: DateTime<Utc>,
  /// Seconds since the server started.
  pub uptime:    f64,
}

/// Routes to be nested under `/api`.
pub fn routes<S>(state: AppState<S>) -> Router<()>
where
  S: SuspectStore + 'static,
{
  Router::new()
    .route("/ping", get(ping::<S>))
    .route("/health", get(health::<S>))
    .with_state(state)
}

/// `GET /ping`
pub async fn ping<S>(State(state): State<AppState<S>>) -> Result<Json<Ping>, ApiError>
where
  S: SuspectStore,
{
  let suspects_count = state.store.count().await?;
  Ok(Json(Ping {
    status: "active",
    timestamp: Utc::now(),
    environment: state.config.environment(),
    suspects_count,
  }))
}

/// `GET /health`
pub async fn health<S>(State(state): State<AppState<S>>) -> Json<Health>
where
  S: SuspectStore,
{
  Json(Health {
    status:    "healthy",
    timestamp: Utc::now(),
    uptime:    state.started.elapsed().as_secs_f64(),
  })
}
