//! Response bodies shared by the API handlers.
//!
//! Every successful response carries `"status": "success"`.

use chrono::{DateTime, Utc};
use dossier_core::suspect::SuspectRecord;
use serde::Serialize;

const SUCCESS: &str = "success";

/// A list of records, as returned by `GET /suspects` and `GET /search`.
#[derive(Debug, Serialize)]
pub struct Listing {
  pub status:    &'static str,
  pub count:     usize,
  pub data:      Vec<SuspectRecord>,
  pub timestamp: DateTime<Utc>,
}

impl Listing {
  pub fn new(data: Vec<SuspectRecord>) -> Self {
    Self {
      status:    SUCCESS,
      count:     data.len(),
      data,
      timestamp: Utc::now(),
    }
  }
}

/// A single record, optionally with a human-readable message.
#[derive(Debug, Serialize)]
pub struct Single {
  pub status:  &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<&'static str>,
  pub data:    SuspectRecord,
}

impl Single {
  pub fn new(data: SuspectRecord) -> Self {
    Self { status: SUCCESS, message: None, data }
  }

  pub fn with_message(message: &'static str, data: SuspectRecord) -> Self {
    Self { status: SUCCESS, message: Some(message), data }
  }
}

/// An acknowledgement without a payload.
#[derive(Debug, Serialize)]
pub struct Ack {
  pub status:  &'static str,
  pub message: &'static str,
}

impl Ack {
  pub fn new(message: &'static str) -> Self {
    Self { status: SUCCESS, message }
  }
}
