//! Deadline records as they live in the persisted document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{validate_date, validate_time};

/// One tracked deadline. The course name doubles as the (imperfect) key
/// across save/reload cycles; two records with the same name collide.
///
/// Field names and the `"0"/"1"` completion flag mirror the on-disk
/// document so existing files keep loading byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    pub course: String,
    /// Jalali date text, `YYYY-MM-DD`.
    #[serde(rename = "deadline_shamsi")]
    pub due_date: String,
    /// `HH:MM:SS`; rows without one default to midnight.
    #[serde(rename = "deadline_time", default = "default_due_time")]
    pub due_time: String,
    #[serde(rename = "checked", with = "flag", default)]
    pub completed: bool,
}

impl DeadlineRecord {
    pub fn new(course: impl Into<String>, due_date: impl Into<String>, due_time: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            due_date: due_date.into(),
            due_time: due_time.into(),
            completed: false,
        }
    }
}

fn default_due_time() -> String {
    "00:00:00".to_string()
}

/// Legacy string encoding of the completion flag.
mod flag {
    use serde::de::{Deserialize, Error};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match String::deserialize(deserializer)?.as_str() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(D::Error::custom(format!(
                "completion flag must be \"0\" or \"1\", got {other:?}"
            ))),
        }
    }
}

/// A row as it sits in the editor form, before validation.
#[derive(Debug, Clone, Default)]
pub struct DeadlineDraft {
    pub course: String,
    pub due_date: String,
    pub hour: String,
    pub minute: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date or time in row(s): {}", .rows.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", "))]
pub struct InvalidRows {
    /// 1-based row numbers, in form order.
    pub rows: Vec<usize>,
}

/// Validate an editor batch as a whole. Any invalid row blocks the entire
/// commit; the caller reports the offending row numbers and keeps the form
/// open. Rows whose course is empty after trimming are dropped, not errors.
pub fn validate_batch(drafts: &[DeadlineDraft]) -> Result<Vec<DeadlineRecord>, InvalidRows> {
    let mut invalid = Vec::new();
    let mut records = Vec::new();

    for (index, draft) in drafts.iter().enumerate() {
        let course = draft.course.trim();
        let date = draft.due_date.trim();

        if !validate_date(date) || !validate_time(&draft.hour, &draft.minute) {
            invalid.push(index + 1);
            continue;
        }

        if course.is_empty() {
            continue;
        }

        // Validated above, so the unwraps cannot fire.
        let hour: u32 = draft.hour.trim().parse().unwrap();
        let minute: u32 = draft.minute.trim().parse().unwrap();
        records.push(DeadlineRecord::new(
            course,
            date,
            format!("{hour:02}:{minute:02}:00"),
        ));
    }

    if invalid.is_empty() {
        Ok(records)
    } else {
        Err(InvalidRows { rows: invalid })
    }
}
