//! In-memory backend for the Dossier record store.
//!
//! Records live in a single mutex-guarded vector for the lifetime of the
//! process; nothing is persisted across restarts.

mod seed;
mod store;

pub use store::MemoryStore;
