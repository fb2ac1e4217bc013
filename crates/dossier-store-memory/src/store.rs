//! [`MemoryStore`] — the in-memory implementation of [`SuspectStore`].

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use tokio::sync::Mutex;

use dossier_core::{
  Error, Result,
  stats::Stats,
  store::{SearchQuery, SuspectStore},
  suspect::{NewSuspect, SuspectId, SuspectPatch, SuspectRecord},
};

use crate::seed;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Dossier record store held entirely in memory.
///
/// Cloning is cheap — clones share the same records. Every operation holds
/// the lock for its full duration, so a read-modify-write inside one call is
/// never interleaved with another write.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<Mutex<Inner>>,
}

struct Inner {
  records: Vec<SuspectRecord>,
  next_id: SuspectId,
}

impl Default for Inner {
  fn default() -> Self {
    Self { records: Vec::new(), next_id: 1 }
  }
}

impl Inner {
  fn position(&self, id: SuspectId) -> Result<usize> {
    self
      .records
      .iter()
      .position(|r| r.id == id)
      .ok_or(Error::NotFound(id))
  }
}

impl MemoryStore {
  /// An empty store whose first record gets id 1.
  pub fn new() -> Self { Self::default() }

  /// A store preloaded with the built-in sample records. The id counter
  /// starts one past the highest seeded id.
  pub fn seeded() -> Self { Self::with_records(seed::records()) }

  /// A store preloaded with `records`, kept in the given order.
  pub fn with_records(records: Vec<SuspectRecord>) -> Self {
    let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    Self {
      inner: Arc::new(Mutex::new(Inner { records, next_id })),
    }
  }
}

fn today() -> NaiveDate { Local::now().date_naive() }

// ─── SuspectStore impl ───────────────────────────────────────────────────────

impl SuspectStore for MemoryStore {
  async fn insert(&self, input: NewSuspect) -> Result<SuspectRecord> {
    let mut inner = self.inner.lock().await;
    let record = input.into_record(inner.next_id, today())?;
    inner.next_id += 1;
    inner.records.push(record.clone());
    Ok(record)
  }

  async fn get(&self, id: SuspectId) -> Result<SuspectRecord> {
    let inner = self.inner.lock().await;
    let idx = inner.position(id)?;
    Ok(inner.records[idx].clone())
  }

  async fn update(&self, id: SuspectId, patch: SuspectPatch) -> Result<SuspectRecord> {
    let mut inner = self.inner.lock().await;
    let idx = inner.position(id)?;
    let record = &mut inner.records[idx];
    patch.apply(record);
    Ok(record.clone())
  }

  async fn delete(&self, id: SuspectId) -> Result<()> {
    let mut inner = self.inner.lock().await;
    let idx = inner.position(id)?;
    inner.records.remove(idx);
    Ok(())
  }

  async fn list_all(&self) -> Result<Vec<SuspectRecord>> {
    Ok(self.inner.lock().await.records.clone())
  }

  async fn count(&self) -> Result<usize> {
    Ok(self.inner.lock().await.records.len())
  }

  async fn search(&self, query: &SearchQuery) -> Result<Vec<SuspectRecord>> {
    let inner = self.inner.lock().await;
    Ok(
      inner
        .records
        .iter()
        .filter(|r| r.matches(query))
        .cloned()
        .collect(),
    )
  }

  async fn stats(&self, as_of: Option<NaiveDate>) -> Result<Stats> {
    let year = as_of.unwrap_or_else(today).year();
    let inner = self.inner.lock().await;
    Ok(Stats::collect(&inner.records, year))
  }
}
