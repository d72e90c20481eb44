//! Record operations over the in-memory structure.
//!
//! These functions never touch the disk and never normalize keys; `Roster`
//! pairs each mutation with a save. Within a bucket, records are addressed by
//! zero-based position.

use crate::error::{Result, RosterError};
use crate::models::{Record, SportsData};

/// Append `record` to the `(sport, age_category)` bucket, creating it if absent.
///
/// Returns the index the record now occupies.
pub fn add_record(
    data: &mut SportsData,
    sport: &str,
    age_category: &str,
    record: Record,
) -> usize {
    let bucket = data
        .entry(sport.to_string())
        .or_default()
        .entry(age_category.to_string())
        .or_default();
    bucket.push(record);
    bucket.len() - 1
}

/// Records in a bucket, optionally narrowed to names containing `name_filter`.
///
/// A missing bucket yields an empty list. An empty filter matches everything.
pub fn view_records(
    data: &SportsData,
    sport: &str,
    age_category: &str,
    name_filter: Option<&str>,
) -> Vec<Record> {
    let Some(bucket) = bucket(data, sport, age_category) else {
        return Vec::new();
    };

    match name_filter.filter(|f| !f.is_empty()) {
        Some(filter) => bucket
            .iter()
            .filter(|r| r.name.contains(filter))
            .cloned()
            .collect(),
        None => bucket.to_vec(),
    }
}

/// Replace the record at `index` in full.
///
/// Fails without touching the structure if the bucket is missing or the index
/// is out of range. Returns the record that was replaced.
pub fn edit_record(
    data: &mut SportsData,
    sport: &str,
    age_category: &str,
    index: usize,
    updated: Record,
) -> Result<Record> {
    let bucket = data
        .get_mut(sport)
        .and_then(|ages| ages.get_mut(age_category))
        .ok_or_else(|| RosterError::BucketNotFound {
            sport: sport.to_string(),
            age_category: age_category.to_string(),
        })?;

    let len = bucket.len();
    let slot = bucket
        .get_mut(index)
        .ok_or(RosterError::IndexOutOfRange { index, len })?;

    Ok(std::mem::replace(slot, updated))
}

/// The bucket's records, if it exists.
pub fn bucket<'a>(
    data: &'a SportsData,
    sport: &str,
    age_category: &str,
) -> Option<&'a [Record]> {
    data.get(sport)
        .and_then(|ages| ages.get(age_category))
        .map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentInput;
    use chrono::NaiveDate;

    fn record(name: &str) -> Record {
        Record::new(
            StudentInput {
                name: name.to_string(),
                ..Default::default()
            },
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            None,
        )
    }

    #[test]
    fn add_creates_buckets_and_returns_index() {
        let mut data = SportsData::new();
        assert_eq!(add_record(&mut data, "cricket", "u14", record("asha")), 0);
        assert_eq!(add_record(&mut data, "cricket", "u14", record("ravi")), 1);
        assert_eq!(add_record(&mut data, "cricket", "u16", record("meera")), 0);
        assert_eq!(data["cricket"].len(), 2);
    }

    #[test]
    fn filter_keeps_order_and_substring_matches() {
        let mut data = SportsData::new();
        for name in ["asha", "ravi", "akash", "meera"] {
            add_record(&mut data, "cricket", "u14", record(name));
        }

        let names: Vec<_> = view_records(&data, "cricket", "u14", Some("a"))
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["asha", "ravi", "akash", "meera"]);

        let names: Vec<_> = view_records(&data, "cricket", "u14", Some("sh"))
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["asha", "akash"]);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let mut data = SportsData::new();
        add_record(&mut data, "cricket", "u14", record("asha"));
        assert_eq!(view_records(&data, "cricket", "u14", Some("")).len(), 1);
    }

    #[test]
    fn view_missing_bucket_is_empty() {
        let data = SportsData::new();
        assert!(view_records(&data, "chess", "u10", None).is_empty());
    }

    #[test]
    fn edit_out_of_range_leaves_bucket_unchanged() {
        let mut data = SportsData::new();
        add_record(&mut data, "cricket", "u14", record("asha"));
        let before = data.clone();

        let err = edit_record(&mut data, "cricket", "u14", 1, record("x")).unwrap_err();
        assert!(matches!(err, RosterError::IndexOutOfRange { index: 1, len: 1 }));

        let err = edit_record(&mut data, "cricket", "u12", 0, record("x")).unwrap_err();
        assert!(matches!(err, RosterError::BucketNotFound { .. }));

        assert_eq!(data, before);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut data = SportsData::new();
        add_record(&mut data, "cricket", "u14", record("asha"));
        add_record(&mut data, "cricket", "u14", record("ravi"));

        let old = edit_record(&mut data, "cricket", "u14", 0, record("asha k")).unwrap();
        assert_eq!(old.name, "asha");
        assert_eq!(data["cricket"]["u14"][0].name, "asha k");
        assert_eq!(data["cricket"]["u14"][1].name, "ravi");
    }
}
