//! Handler for `GET /stats`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use chrono::NaiveDate;
use dossier_core::{stats::Stats, store::SuspectStore};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct StatsParams {
  /// Reference date for age computation (`YYYY-MM-DD`). Defaults to today.
  pub as_of: Option<NaiveDate>,
}

/// `GET /stats[?as_of=YYYY-MM-DD]` — the bare aggregate, no envelope.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<StatsParams>, QueryRejection>,
) -> Result<Json<Stats>, ApiError>
where
  S: SuspectStore,
{
  let Query(params) = params?;
  let stats = store.stats(params.as_of).await?;
  Ok(Json(stats))
}
