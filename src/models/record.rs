use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's enrollment entry inside a `(sport, age category)` bucket.
///
/// Every user-supplied field is stored lowercase. `current_date` records the
/// day of the last add or edit and is never taken from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Assigned when the record is added and kept across edits.
    /// Files written before ids existed load with `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub class: String,
    pub sect: String,
    pub birth_date: String,
    pub current_date: NaiveDate,
    pub father_name: String,
    pub mother_name: String,
    pub phone_no: String,
    pub email: String,
}

impl Record {
    /// Build a record from user input, stamped with `current_date`.
    pub fn new(input: StudentInput, current_date: NaiveDate, id: Option<Uuid>) -> Self {
        Self {
            id,
            name: input.name,
            class: input.class,
            sect: input.sect,
            birth_date: input.birth_date,
            current_date,
            father_name: input.father_name,
            mother_name: input.mother_name,
            phone_no: input.phone_no,
            email: input.email,
        }
    }

    /// The user-editable fields of this record, e.g. to prefill an edit.
    pub fn to_input(&self) -> StudentInput {
        StudentInput {
            name: self.name.clone(),
            class: self.class.clone(),
            sect: self.sect.clone(),
            birth_date: self.birth_date.clone(),
            father_name: self.father_name.clone(),
            mother_name: self.mother_name.clone(),
            phone_no: self.phone_no.clone(),
            email: self.email.clone(),
        }
    }

    /// Serialized key and value for every field except `id`.
    pub fn keyed_fields(&self) -> [(&'static str, String); 9] {
        [
            ("name", self.name.clone()),
            ("class", self.class.clone()),
            ("sect", self.sect.clone()),
            ("birth_date", self.birth_date.clone()),
            ("current_date", self.current_date.format("%Y-%m-%d").to_string()),
            ("father_name", self.father_name.clone()),
            ("mother_name", self.mother_name.clone()),
            ("phone_no", self.phone_no.clone()),
            ("email", self.email.clone()),
        ]
    }

    /// Display label and value for every field, in presentation order.
    pub fn labeled_fields(&self) -> [(&'static str, String); 9] {
        [
            ("Name", self.name.clone()),
            ("Class", self.class.clone()),
            ("Section", self.sect.clone()),
            ("Birth Date", self.birth_date.clone()),
            ("Current Date", self.current_date.format("%Y-%m-%d").to_string()),
            ("Father's Name", self.father_name.clone()),
            ("Mother's Name", self.mother_name.clone()),
            ("Phone No", self.phone_no.clone()),
            ("Email", self.email.clone()),
        ]
    }
}

/// Input for adding a record or replacing one in full.
///
/// There is no partial update: every field is written, so a field left empty
/// here overwrites the stored value with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub class: String,
    pub sect: String,
    pub birth_date: String,
    pub father_name: String,
    pub mother_name: String,
    pub phone_no: String,
    /// Optional on entry; stored as an empty string when not given.
    #[serde(default)]
    pub email: String,
}

impl StudentInput {
    /// Lowercase every field. Callers apply this at the input boundary.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.to_lowercase(),
            class: self.class.to_lowercase(),
            sect: self.sect.to_lowercase(),
            birth_date: self.birth_date.to_lowercase(),
            father_name: self.father_name.to_lowercase(),
            mother_name: self.mother_name.to_lowercase(),
            phone_no: self.phone_no.to_lowercase(),
            email: self.email.to_lowercase(),
        }
    }
}
