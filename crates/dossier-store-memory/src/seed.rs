//! Built-in sample records loaded by [`MemoryStore::seeded`](crate::MemoryStore::seeded).

use chrono::NaiveDate;

use dossier_core::suspect::SuspectRecord;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

pub(crate) fn records() -> Vec<SuspectRecord> {
  vec![
    SuspectRecord {
      id:                 1,
      full_name:          "Mokshankin Dmitry Alekseevich".into(),
      alias:              strings(&["Mokshan", "DM", "CyberMok"]),
      date_of_birth:      "2005-01-28".into(),
      birth_place:        "Chelyabinsk".into(),
      nationality:        "RU".into(),
      crime_type:         "cyber-terrorism".into(),
      crime_details:      "Building and distributing malware, intrusion into government \
                           systems, DDoS attacks on government websites"
        .into(),
      status:             "wanted".into(),
      last_seen:          "2026-02-10".into(),
      last_seen_location: "Chelyabinsk, Lenina st. 54".into(),
      danger_level:       "high".into(),
      added_date:         date(2026, 1, 15),
      case_number:        "2026-001".into(),
      investigator:       "Sidorov A.A.".into(),
      notes:              "Technical education, operates as part of a group. Presumed to \
                           be in Chelyabinsk."
        .into(),
    },
    SuspectRecord {
      id:                 2,
      full_name:          "Balin Dmitry Aleksandrovich".into(),
      alias:              strings(&["Bal", "Bal1n", "CyberGhost", "Ghost"]),
      date_of_birth:      "2007-06-09".into(),
      birth_place:        "Chelyabinsk".into(),
      nationality:        "RU".into(),
      crime_type:         "cyber-extremism".into(),
      crime_details:      "Spreading extremist material online, DDoS attacks, social \
                           network account takeovers"
        .into(),
      status:             "wanted".into(),
      last_seen:          "2026-02-11".into(),
      last_seen_location: "Chelyabinsk, Komsomolsky ave. 83".into(),
      danger_level:       "medium".into(),
      added_date:         date(2026, 1, 20),
      case_number:        "2026-002".into(),
      investigator:       "Petrov I.I.".into(),
      notes:              "Minor, parents may be contacted. No prior convictions.".into(),
    },
  ]
}
