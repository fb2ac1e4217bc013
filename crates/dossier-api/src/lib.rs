//! JSON REST API for Dossier.
//!
//! Exposes an axum [`Router`] backed by any
//! [`dossier_core::store::SuspectStore`]. Liveness endpoints, CORS and
//! request logging are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", dossier_api::api_router(store.clone()))
//! ```

pub mod envelope;
pub mod error;
pub mod search;
pub mod stats;
pub mod suspects;

use std::sync::Arc;

use axum::{Router, routing::get};
use dossier_core::store::SuspectStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SuspectStore + 'static,
{
  Router::new()
    .route("/suspects", get(suspects::list::<S>).post(suspects::create::<S>))
    .route(
      "/suspects/{id}",
      get(suspects::get_one::<S>)
        .put(suspects::update_one::<S>)
        .delete(suspects::delete_one::<S>),
    )
    .route("/search", get(search::handler::<S>))
    .route("/stats", get(stats::handler::<S>))
    .with_state(store)
}
