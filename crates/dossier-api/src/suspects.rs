//! Handlers for `/suspects` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/suspects`      | All records in insertion order |
//! | `POST`   | `/suspects`      | Body: [`NewSuspect`]; returns 201, or 400 on a missing required field |
//! | `GET`    | `/suspects/:id`  | 404 if not found |
//! | `PUT`    | `/suspects/:id`  | Body: [`SuspectPatch`]; only present fields change |
//! | `DELETE` | `/suspects/:id`  | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use dossier_core::{
  store::SuspectStore,
  suspect::{NewSuspect, SuspectId, SuspectPatch},
};

use crate::{
  envelope::{Ack, Listing, Single},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /suspects`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Listing>, ApiError>
where
  S: SuspectStore,
{
  let records = store.list_all().await?;
  Ok(Json(Listing::new(records)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /suspects` — returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewSuspect>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SuspectStore,
{
  let Json(body) = body?;
  let record = store.insert(body).await?;
  Ok((StatusCode::CREATED, Json(Single::with_message("suspect added", record))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /suspects/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<SuspectId>, PathRejection>,
) -> Result<Json<Single>, ApiError>
where
  S: SuspectStore,
{
  let Path(id) = id?;
  let record = store.get(id).await?;
  Ok(Json(Single::new(record)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /suspects/:id` — body is a partial record.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<SuspectId>, PathRejection>,
  body: Result<Json<SuspectPatch>, JsonRejection>,
) -> Result<Json<Single>, ApiError>
where
  S: SuspectStore,
{
  let Path(id) = id?;
  let Json(patch) = body?;
  let record = store.update(id, patch).await?;
  Ok(Json(Single::with_message("suspect updated", record)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /suspects/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<SuspectId>, PathRejection>,
) -> Result<Json<Ack>, ApiError>
where
  S: SuspectStore,
{
  let Path(id) = id?;
  store.delete(id).await?;
  Ok(Json(Ack::new("suspect deleted")))
}
