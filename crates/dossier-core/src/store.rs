//! The `SuspectStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `dossier-store-memory`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::{
  Result,
  stats::Stats,
  suspect::{NewSuspect, SuspectId, SuspectPatch, SuspectRecord},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`SuspectStore::search`].
///
/// Empty strings are treated the same as `None`. See
/// [`SuspectRecord::matches`] for the exact rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
  /// Case-insensitive substring over the free-text fields.
  pub text:         Option<String>,
  pub crime_type:   Option<String>,
  pub danger_level: Option<String>,
  pub status:       Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Dossier record store backend.
///
/// Ids are assigned by the store from a monotonic counter and never reused,
/// even after deletion. All methods return `Send` futures so the trait can
/// be used behind `axum`.
pub trait SuspectStore: Send + Sync {
  /// Validate `input`, assign the next id, fill defaults and append.
  ///
  /// Fails with [`Error::MissingField`](crate::Error::MissingField) without
  /// consuming an id when a required field is absent.
  fn insert(
    &self,
    input: NewSuspect,
  ) -> impl Future<Output = Result<SuspectRecord>> + Send + '_;

  /// Fails with [`Error::NotFound`](crate::Error::NotFound) for unknown ids.
  fn get(
    &self,
    id: SuspectId,
  ) -> impl Future<Output = Result<SuspectRecord>> + Send + '_;

  /// Merge `patch` into the record and return the updated record.
  fn update(
    &self,
    id: SuspectId,
    patch: SuspectPatch,
  ) -> impl Future<Output = Result<SuspectRecord>> + Send + '_;

  /// Remove the record permanently.
  fn delete(
    &self,
    id: SuspectId,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Every record, in insertion order.
  fn list_all(&self) -> impl Future<Output = Result<Vec<SuspectRecord>>> + Send + '_;

  fn count(&self) -> impl Future<Output = Result<usize>> + Send + '_;

  /// Records matching `query`, in insertion order.
  fn search<'a>(
    &'a self,
    query: &'a SearchQuery,
  ) -> impl Future<Output = Result<Vec<SuspectRecord>>> + Send + 'a;

  /// Aggregate statistics. Ages are computed against the year of `as_of`,
  /// which defaults to today.
  fn stats(
    &self,
    as_of: Option<NaiveDate>,
  ) -> impl Future<Output = Result<Stats>> + Send + '_;
}
