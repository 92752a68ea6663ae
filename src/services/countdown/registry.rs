//! Keyed registry of the rows currently on screen.
//!
//! Backs the renderer's two refresh tiers. A full rebuild replaces the
//! visible set after any structural change. A tick update refreshes rows
//! already visible and retracts rows that vanished, but deliberately does
//! not surface newly added keys; those wait for the next full rebuild.

use std::collections::HashSet;

use super::models::DeadlineRow;

/// What a tick pass asks the renderer to do, in visible order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickUpdate {
    /// Rows to repaint in place.
    pub updates: Vec<DeadlineRow>,
    /// Course keys whose rows disappeared and must be retracted.
    pub retractions: Vec<String>,
}

/// Visible rows keyed by course name, in display order.
#[derive(Debug, Default)]
pub struct VisibleRegistry {
    keys: Vec<String>,
}

impl VisibleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible set with freshly computed rows.
    pub fn rebuild(&mut self, rows: &[DeadlineRow]) {
        self.keys = rows.iter().map(|row| row.course.clone()).collect();
    }

    /// Refresh the existing visible set against freshly computed rows.
    pub fn tick(&mut self, rows: &[DeadlineRow]) -> TickUpdate {
        let mut update = TickUpdate::default();
        let mut kept = Vec::with_capacity(self.keys.len());

        for key in &self.keys {
            match rows.iter().find(|row| &row.course == key) {
                Some(row) => {
                    update.updates.push(row.clone());
                    kept.push(key.clone());
                }
                None => update.retractions.push(key.clone()),
            }
        }

        self.keys = kept;
        update
    }

    pub fn visible_keys(&self) -> &[String] {
        &self.keys
    }

    /// Keys present in the fresh rows but not yet visible. A renderer can
    /// use this to decide a full rebuild is due.
    pub fn pending_keys(&self, rows: &[DeadlineRow]) -> Vec<String> {
        let visible: HashSet<&str> = self.keys.iter().map(String::as_str).collect();
        rows.iter()
            .filter(|row| !visible.contains(row.course.as_str()))
            .map(|row| row.course.clone())
            .collect()
    }
}
