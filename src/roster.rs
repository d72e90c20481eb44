//! The owned roster handle: a [`Store`] plus the structure loaded from it.
//!
//! Bucket keys are lowercased here before every lookup, so `"Soccer"` and
//! `"soccer"` address the same bucket. Record fields are stored as given;
//! lowercasing them is the caller's job (see [`StudentInput::normalized`]).

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Result, RosterError};
use crate::models::*;
use crate::records;
use crate::store::Store;

/// Source of "today" for `current_date` stamps.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct Roster {
    store: Store,
    data: SportsData,
    clock: Clock,
}

impl Roster {
    /// Load the store's data once; every later mutation rewrites it in full.
    pub fn open(store: Store) -> Self {
        Self::with_clock(store, local_today)
    }

    pub fn with_clock(store: Store, clock: Clock) -> Self {
        let data = store.load();
        Self { store, data, clock }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn data(&self) -> &SportsData {
        &self.data
    }

    /// Append a new record and save. Returns its index and the stored record.
    pub fn add_record(
        &mut self,
        sport: &str,
        age_category: &str,
        input: StudentInput,
    ) -> Result<(usize, Record)> {
        let (sport, age_category) = (bucket_key(sport), bucket_key(age_category));
        let record = Record::new(input, (self.clock)(), Some(Uuid::new_v4()));

        let mut next = self.data.clone();
        let index = records::add_record(&mut next, &sport, &age_category, record.clone());
        self.commit(next)?;

        tracing::info!("Added record {} to {}/{}", index, sport, age_category);
        Ok((index, record))
    }

    /// Records in a bucket whose name contains `name_filter`, in stored order.
    pub fn view_records(
        &self,
        sport: &str,
        age_category: &str,
        name_filter: Option<&str>,
    ) -> Vec<Record> {
        records::view_records(
            &self.data,
            &bucket_key(sport),
            &bucket_key(age_category),
            name_filter,
        )
    }

    /// Every record in a bucket paired with its index.
    pub fn view_all(&self, sport: &str, age_category: &str) -> Vec<(usize, Record)> {
        records::bucket(&self.data, &bucket_key(sport), &bucket_key(age_category))
            .map(|bucket| bucket.iter().cloned().enumerate().collect())
            .unwrap_or_default()
    }

    /// The record at `index`, e.g. to prefill an edit.
    pub fn get_record(&self, sport: &str, age_category: &str, index: usize) -> Result<Record> {
        let (sport, age_category) = (bucket_key(sport), bucket_key(age_category));
        let bucket = records::bucket(&self.data, &sport, &age_category).ok_or_else(|| {
            RosterError::BucketNotFound {
                sport: sport.clone(),
                age_category: age_category.clone(),
            }
        })?;
        bucket
            .get(index)
            .cloned()
            .ok_or(RosterError::IndexOutOfRange {
                index,
                len: bucket.len(),
            })
    }

    /// Replace the record at `index` in full and save.
    ///
    /// `current_date` is reset to today and the record keeps its id. A missing
    /// bucket or out-of-range index is an error; nothing is changed or saved.
    pub fn edit_record(
        &mut self,
        sport: &str,
        age_category: &str,
        index: usize,
        input: StudentInput,
    ) -> Result<Record> {
        let (sport, age_category) = (bucket_key(sport), bucket_key(age_category));
        let id = self.get_record(&sport, &age_category, index)?.id;
        let record = Record::new(input, (self.clock)(), id);

        let mut next = self.data.clone();
        records::edit_record(&mut next, &sport, &age_category, index, record.clone())?;
        self.commit(next)?;

        tracing::info!("Updated record {} in {}/{}", index, sport, age_category);
        Ok(record)
    }

    /// Save `next` and adopt it as the in-memory structure. On a failed save
    /// the previous structure stays in place.
    fn commit(&mut self, next: SportsData) -> Result<()> {
        self.store.save(&next)?;
        self.data = next;
        Ok(())
    }

    /// Current index of the record with `id`, if it is in the bucket.
    pub fn position_of(&self, sport: &str, age_category: &str, id: Uuid) -> Option<usize> {
        records::bucket(&self.data, &bucket_key(sport), &bucket_key(age_category))?
            .iter()
            .position(|r| r.id == Some(id))
    }

    /// Every bucket with its record count, ordered by sport then age category.
    pub fn buckets(&self) -> Vec<BucketSummary> {
        self.data
            .iter()
            .flat_map(|(sport, ages)| {
                ages.iter().map(move |(age_category, bucket)| BucketSummary {
                    sport: sport.clone(),
                    age_category: age_category.clone(),
                    count: bucket.len(),
                })
            })
            .collect()
    }
}
