//! Aggregate statistics over a set of records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::suspect::SuspectRecord;

/// Counts per distinct field value.
pub type Histogram = BTreeMap<String, usize>;

/// Age histogram with fixed buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBuckets {
  #[serde(rename = "<18")]
  pub under_18:   usize,
  #[serde(rename = "18-25")]
  pub from_18:    usize,
  #[serde(rename = "26-35")]
  pub from_26:    usize,
  #[serde(rename = "36+")]
  pub from_36:    usize,
}

impl AgeBuckets {
  fn record(&mut self, age: i32) {
    match age {
      i32::MIN..=17 => self.under_18 += 1,
      18..=25 => self.from_18 += 1,
      26..=35 => self.from_26 += 1,
      _ => self.from_36 += 1,
    }
  }
}

/// The aggregate returned by `GET /stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
  pub total:           usize,
  pub by_crime_type:   Histogram,
  pub by_danger_level: Histogram,
  pub by_status:       Histogram,
  /// Grouped by `birth_place`; records without one are not counted.
  #[serde(rename = "by_city")]
  pub by_birth_place:  Histogram,
  pub by_age_group:    AgeBuckets,
}

impl Stats {
  /// Aggregate `records`, computing ages as `reference_year - birth_year`.
  ///
  /// Records whose birth year cannot be parsed still count everywhere except
  /// the age histogram.
  pub fn collect<'a>(
    records: impl IntoIterator<Item = &'a SuspectRecord>,
    reference_year: i32,
  ) -> Self {
    let mut stats = Self::default();

    for r in records {
      stats.total += 1;
      bump(&mut stats.by_crime_type, &r.crime_type);
      bump(&mut stats.by_danger_level, &r.danger_level);
      bump(&mut stats.by_status, &r.status);
      if !r.birth_place.is_empty() {
        bump(&mut stats.by_birth_place, &r.birth_place);
      }
      if let Some(year) = r.birth_year() {
        stats.by_age_group.record(reference_year.saturating_sub(year));
      }
    }

    stats
  }
}

fn bump(histogram: &mut Histogram, key: &str) {
  *histogram.entry(key.to_owned()).or_default() += 1;
}
