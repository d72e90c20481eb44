use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Record;

/// Records of one sport, keyed by age category.
pub type AgeCategories = BTreeMap<String, Vec<Record>>;

/// The full persisted structure: sport → age category → ordered records.
///
/// Ordered maps keep the file output stable between saves.
pub type SportsData = BTreeMap<String, AgeCategories>;

/// One bucket and how many records it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub sport: String,
    pub age_category: String,
    pub count: usize,
}

/// Lowercase a sport or age category so it can be used as a bucket key.
pub fn bucket_key(s: &str) -> String {
    s.to_lowercase()
}
