//! Handler for `GET /search`.
//!
//! Query params map directly to [`SearchQuery`] fields; `q` is the free-text
//! term. Empty parameters are treated as absent.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use dossier_core::store::{SearchQuery, SuspectStore};
use serde::Deserialize;

use crate::{envelope::Listing, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  /// Free-text term matched against names, aliases, details, birth place and
  /// notes.
  pub q:            Option<String>,
  pub crime_type:   Option<String>,
  pub danger_level: Option<String>,
  pub status:       Option<String>,
}

impl From<SearchParams> for SearchQuery {
  fn from(p: SearchParams) -> Self {
    SearchQuery {
      text:         non_empty(p.q),
      crime_type:   non_empty(p.crime_type),
      danger_level: non_empty(p.danger_level),
      status:       non_empty(p.status),
    }
  }
}

fn non_empty(s: Option<String>) -> Option<String> { s.filter(|s| !s.is_empty()) }

/// `GET /search[?q=...][&crime_type=...][&danger_level=...][&status=...]`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Listing>, ApiError>
where
  S: SuspectStore,
{
  let Query(params) = params?;
  let query = SearchQuery::from(params);
  let records = store.search(&query).await?;
  Ok(Json(Listing::new(records)))
}
