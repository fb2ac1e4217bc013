//! Error types for `dossier-core`.

use thiserror::Error;

use crate::suspect::SuspectId;

#[derive(Debug, Error)]
pub enum Error {
  /// A field required at creation was absent or empty.
  #[error("field {0} is required")]
  MissingField(&'static str),

  #[error("suspect not found: {0}")]
  NotFound(SuspectId),

  /// Storage failure. `MemoryStore` never produces one; the variant exists
  /// for backends that can fail.
  #[error("backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
