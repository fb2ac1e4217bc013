//! Suspect records — the single entity kept by the Dossier store.
//!
//! A record is created from a [`NewSuspect`], mutated only through a
//! [`SuspectPatch`], and removed by id. Ids come from a monotonic counter
//! owned by the store and are never reassigned.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, store::SearchQuery};

/// Integer identity of a record.
pub type SuspectId = u64;

pub const DEFAULT_NATIONALITY: &str = "RU";
pub const DEFAULT_STATUS: &str = "wanted";
pub const DEFAULT_DANGER_LEVEL: &str = "medium";

// ─── Stored record ───────────────────────────────────────────────────────────

/// A stored suspect record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectRecord {
  pub id:                 SuspectId,
  pub full_name:          String,
  pub alias:              Vec<String>,
  /// ISO `YYYY-MM-DD` as supplied; not validated beyond being non-empty.
  pub date_of_birth:      String,
  pub birth_place:        String,
  pub nationality:        String,
  pub crime_type:         String,
  pub crime_details:      String,
  pub status:             String,
  pub last_seen:          String,
  pub last_seen_location: String,
  pub danger_level:       String,
  /// Stamped at insert; no patch can change it.
  pub added_date:         NaiveDate,
  pub case_number:        String,
  pub investigator:       String,
  pub notes:              String,
}

impl SuspectRecord {
  /// Whether this record satisfies every clause of `query`.
  ///
  /// The text clause is an OR across `full_name`, each alias,
  /// `crime_details`, `birth_place` and `notes`, compared case-insensitively.
  /// An empty text passes. Each non-empty filter must equal the
  /// corresponding field exactly.
  pub fn matches(&self, query: &SearchQuery) -> bool {
    self.matches_text(query.text.as_deref())
      && filter_passes(query.crime_type.as_deref(), &self.crime_type)
      && filter_passes(query.danger_level.as_deref(), &self.danger_level)
      && filter_passes(query.status.as_deref(), &self.status)
  }

  fn matches_text(&self, text: Option<&str>) -> bool {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
      return true;
    };
    let needle = text.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    hit(&self.full_name)
      || self.alias.iter().any(|a| hit(a))
      || hit(&self.crime_details)
      || hit(&self.birth_place)
      || hit(&self.notes)
  }

  /// Birth year taken from the leading `-`-separated component of
  /// `date_of_birth`. `None` when that component is not an integer.
  pub fn birth_year(&self) -> Option<i32> {
    self
      .date_of_birth
      .split('-')
      .next()
      .and_then(|y| y.trim().parse().ok())
  }
}

fn filter_passes(filter: Option<&str>, value: &str) -> bool {
  match filter {
    Some(f) if !f.is_empty() => f == value,
    _ => true,
  }
}

// ─── Creation input ──────────────────────────────────────────────────────────

/// Input accepted by [`SuspectStore::insert`](crate::store::SuspectStore::insert).
///
/// Every field is optional on the wire; `full_name`, `date_of_birth` and
/// `crime_type` are checked by [`NewSuspect::into_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewSuspect {
  pub full_name:          Option<String>,
  pub alias:              Option<Vec<String>>,
  pub date_of_birth:      Option<String>,
  pub birth_place:        Option<String>,
  pub nationality:        Option<String>,
  pub crime_type:         Option<String>,
  pub crime_details:      Option<String>,
  pub status:             Option<String>,
  pub last_seen:          Option<String>,
  pub last_seen_location: Option<String>,
  pub danger_level:       Option<String>,
  pub case_number:        Option<String>,
  pub investigator:       Option<String>,
  pub notes:              Option<String>,
}

impl NewSuspect {
  /// Check the required fields, reporting the first one missing.
  pub fn validate(&self) -> Result<()> {
    require(self.full_name.as_deref(), "full_name")?;
    require(self.date_of_birth.as_deref(), "date_of_birth")?;
    require(self.crime_type.as_deref(), "crime_type")?;
    Ok(())
  }

  /// Build the stored record for `id`, filling defaults relative to `today`.
  pub fn into_record(self, id: SuspectId, today: NaiveDate) -> Result<SuspectRecord> {
    self.validate()?;

    Ok(SuspectRecord {
      id,
      full_name:          self.full_name.unwrap_or_default(),
      alias:              self.alias.unwrap_or_default(),
      date_of_birth:      self.date_of_birth.unwrap_or_default(),
      birth_place:        self.birth_place.unwrap_or_default(),
      nationality:        self
        .nationality
        .unwrap_or_else(|| DEFAULT_NATIONALITY.to_owned()),
      crime_type:         self.crime_type.unwrap_or_default(),
      crime_details:      self.crime_details.unwrap_or_default(),
      status:             self.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
      last_seen:          self
        .last_seen
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
      last_seen_location: self.last_seen_location.unwrap_or_default(),
      danger_level:       self
        .danger_level
        .unwrap_or_else(|| DEFAULT_DANGER_LEVEL.to_owned()),
      added_date:         today,
      case_number:        self
        .case_number
        .unwrap_or_else(|| default_case_number(id, today)),
      investigator:       self.investigator.unwrap_or_default(),
      notes:              self.notes.unwrap_or_default(),
    })
  }
}

fn require(value: Option<&str>, field: &'static str) -> Result<()> {
  match value {
    Some(v) if !v.is_empty() => Ok(()),
    _ => Err(Error::MissingField(field)),
  }
}

/// `"<year>-<id padded to three digits>"`, e.g. `2026-007`.
pub fn default_case_number(id: SuspectId, today: NaiveDate) -> String {
  format!("{}-{id:03}", today.year())
}

// ─── Partial update ──────────────────────────────────────────────────────────

/// A partial update. Absent (or `null`) fields leave the record untouched.
///
/// There is no `id` or `added_date` here; both are fixed for the lifetime of
/// a record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuspectPatch {
  pub full_name:          Option<String>,
  pub alias:              Option<Vec<String>>,
  pub date_of_birth:      Option<String>,
  pub birth_place:        Option<String>,
  pub nationality:        Option<String>,
  pub crime_type:         Option<String>,
  pub crime_details:      Option<String>,
  pub status:             Option<String>,
  pub last_seen:          Option<String>,
  pub last_seen_location: Option<String>,
  pub danger_level:       Option<String>,
  pub case_number:        Option<String>,
  pub investigator:       Option<String>,
  pub notes:              Option<String>,
}

impl SuspectPatch {
  /// Merge the present fields into `record`.
  pub fn apply(self, record: &mut SuspectRecord) {
    merge(&mut record.full_name, self.full_name);
    merge(&mut record.alias, self.alias);
    merge(&mut record.date_of_birth, self.date_of_birth);
    merge(&mut record.birth_place, self.birth_place);
    merge(&mut record.nationality, self.nationality);
    merge(&mut record.crime_type, self.crime_type);
    merge(&mut record.crime_details, self.crime_details);
    merge(&mut record.status, self.status);
    merge(&mut record.last_seen, self.last_seen);
    merge(&mut record.last_seen_location, self.last_seen_location);
    merge(&mut record.danger_level, self.danger_level);
    merge(&mut record.case_number, self.case_number);
    merge(&mut record.investigator, self.investigator);
    merge(&mut record.notes, self.notes);
  }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
  if let Some(v) = value {
    *slot = v;
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
