//! Plain-text rendering of records and buckets.

use crate::models::{BucketSummary, Record};

const RULE_WIDTH: usize = 40;

fn push_fields(output: &mut String, record: &Record) {
    for (label, value) in record.labeled_fields() {
        output.push_str(label);
        output.push_str(": ");
        output.push_str(&value);
        output.push('\n');
    }
}

/// Filtered view results, numbered from 1.
pub fn render_records(records: &[Record]) -> String {
    if records.is_empty() {
        return "No students found.\n".to_string();
    }

    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!("Student {}:\n", i + 1));
        push_fields(&mut output, record);
        output.push('\n');
    }
    output
}

/// A whole bucket, each record headed by the index edits address it by.
pub fn render_all(records: &[(usize, Record)]) -> String {
    if records.is_empty() {
        return "No students found for the selected sport and age category.\n".to_string();
    }

    let mut output = String::from("All Students:\n\n");
    for (index, record) in records {
        output.push_str(&format!("Index: {}\n", index));
        push_fields(&mut output, record);
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
    }
    output
}

/// Preview shown after an add. Labels are the field keys in title case.
pub fn render_preview(index: usize, record: &Record) -> String {
    let mut output = format!("Student Added (Index {}):\n\n", index);
    for (key, value) in record.keyed_fields() {
        output.push_str(&title_case(key));
        output.push_str(": ");
        output.push_str(&value);
        output.push('\n');
    }
    output
}

/// `father_name` -> `Father Name`
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A single record, e.g. loaded for editing.
pub fn render_record(index: usize, record: &Record) -> String {
    let mut output = format!("Index: {}\n", index);
    push_fields(&mut output, record);
    output
}

/// Sports as roots with their age categories and record counts beneath.
///
/// Example output:
/// ```text
/// cricket
/// ├── u14 (2)
/// └── u16 (1)
/// football
/// └── u12 (4)
/// ```
pub fn render_buckets(buckets: &[BucketSummary]) -> String {
    if buckets.is_empty() {
        return "No sports recorded.\n".to_string();
    }

    let mut output = String::new();
    for (i, bucket) in buckets.iter().enumerate() {
        let new_sport = i == 0 || buckets[i - 1].sport != bucket.sport;
        let is_last = buckets
            .get(i + 1)
            .map_or(true, |next| next.sport != bucket.sport);

        if new_sport {
            output.push_str(&bucket.sport);
            output.push('\n');
        }

        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(branch);
        output.push_str(&format!("{} ({})\n", bucket.age_category, bucket.count));
    }
    output
}
