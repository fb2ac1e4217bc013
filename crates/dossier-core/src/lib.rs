//! Core types and trait definitions for the Dossier record store.
//!
//! This crate is deliberately free of HTTP and storage dependencies. The
//! search and aggregation rules live here so every backend shares them.

pub mod error;
pub mod stats;
pub mod store;
pub mod suspect;

pub use error::{Error, Result};
