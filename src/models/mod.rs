//! Domain models for the sports roster.
//!
//! # Core Concepts
//!
//! - [`SportsData`]: The whole in-memory structure, `sport → age category → records`.
//!   Bucket keys are stored lowercase.
//! - [`Record`]: One student's enrollment entry. Its position inside a bucket is
//!   what view and edit operations address.
//! - [`StudentInput`]: The user-supplied fields of a record, before the system
//!   stamps `current_date` and `id`.
//! - [`BucketSummary`]: A `(sport, age category, count)` row for listing buckets.

mod bucket;
mod record;

pub use bucket::*;
pub use record::*;
