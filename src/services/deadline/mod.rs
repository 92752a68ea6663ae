//! Persisted deadline collection.
//!
//! The store is stateless between calls: every operation is an independent
//! read-modify-write against the JSON document. There is no locking; this
//! is only sound under single-threaded dispatch, so a concurrent host must
//! wrap each call in its own critical section.

mod persistence;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::deadline::DeadlineRecord;
use persistence::{load_document, save_document};

pub struct DeadlineStore {
    path: PathBuf,
}

impl DeadlineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in document order. A missing document counts as an
    /// empty store and is created on the spot; an unreadable or malformed
    /// one degrades to empty with a warning, never an error.
    pub fn load(&self) -> Vec<DeadlineRecord> {
        if !self.path.exists() {
            if let Err(err) = save_document(&self.path, &[]) {
                log::warn!("could not create empty deadline document: {err:#}");
            }
            return Vec::new();
        }

        match load_document(&self.path) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("treating deadline document as empty: {err:#}");
                Vec::new()
            }
        }
    }

    /// Replace the document with exactly `records`. Not a merge: anything
    /// the caller wants preserved must already be in the slice.
    pub fn save_all(&self, records: &[DeadlineRecord]) -> Result<()> {
        save_document(&self.path, records)
    }

    /// The editor's save path: a full replace that first carries the stored
    /// completion flag forward by course name, so re-saving a batch cannot
    /// silently un-check records.
    pub fn save_batch(&self, records: &[DeadlineRecord]) -> Result<()> {
        let stored = self.load();
        let merged: Vec<DeadlineRecord> = records
            .iter()
            .map(|record| {
                let mut record = record.clone();
                if let Some(existing) = stored.iter().find(|r| r.course == record.course) {
                    record.completed = existing.completed;
                }
                record
            })
            .collect();
        save_document(&self.path, &merged)
    }

    /// Insert or update a single record by course name. Updates keep the
    /// stored completion flag.
    pub fn upsert(&self, record: DeadlineRecord) -> Result<()> {
        let mut records = self.load();
        match records.iter_mut().find(|r| r.course == record.course) {
            Some(existing) => {
                let completed = existing.completed;
                *existing = record;
                existing.completed = completed;
            }
            None => records.push(record),
        }
        save_document(&self.path, &records)
    }

    /// Flip the completion flag on the first record matching `course` and
    /// rewrite the document. Unknown course names are a silent no-op and
    /// leave the document untouched.
    pub fn set_completed(&self, course: &str, value: bool) -> Result<bool> {
        let mut records = self.load();
        match records.iter_mut().find(|r| r.course == course) {
            Some(record) => {
                record.completed = value;
                save_document(&self.path, &records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
