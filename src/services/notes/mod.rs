//! Per-day notebook persistence.
//!
//! One JSON document maps Jalali day keys (`YYYY-MM-DD`) to free text.
//! Every save is a read-modify-write of the whole mapping; the application
//! never deletes an entry. Past days are read-only at the editor level,
//! though nothing stops direct edits of the document itself.

pub mod editor;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::date::JalaliDate;

pub use editor::NoteEditor;

pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored text for a day, or empty when the day has no entry or the
    /// document is missing or unreadable.
    pub fn load_note(&self, day: JalaliDate) -> String {
        self.load_map()
            .remove(&day.to_string())
            .unwrap_or_default()
    }

    /// Write one day's text, rewriting the whole document.
    pub fn save_note(&self, day: JalaliDate, text: &str) -> Result<()> {
        let mut notes = self.load_map();
        notes.insert(day.to_string(), text.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(&notes)?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("failed to write notes to {}", self.path.display()))?;
        Ok(())
    }

    fn load_map(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("treating notes document as empty: {err}");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(notes) => notes,
            Err(err) => {
                log::warn!(
                    "treating notes document {} as empty: {err}",
                    self.path.display()
                );
                BTreeMap::new()
            }
        }
    }
}

/// Whether a day's note may still be edited. Past days are read-only.
pub fn is_editable(day: JalaliDate, today: JalaliDate) -> bool {
    day >= today
}
