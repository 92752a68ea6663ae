//! Debounced note editing.
//!
//! The editor sits in one of two states per day: viewing, or holding an
//! uncommitted edit with a debounce deadline. Every keystroke re-arms the
//! deadline; once it elapses with no further edits the text commits and the
//! editor is back to viewing. Navigating to another day or closing the
//! window while a save is pending forces an immediate synchronous commit,
//! so an edit is never dropped across a transition.

use std::time::{Duration, Instant};

use anyhow::Result;

use super::{is_editable, NotesStore};
use crate::utils::date::JalaliDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Viewing,
    PendingSave { deadline: Instant },
}

pub struct NoteEditor<'a> {
    store: &'a NotesStore,
    day: JalaliDate,
    today: JalaliDate,
    debounce: Duration,
    buffer: String,
    state: EditorState,
}

impl<'a> NoteEditor<'a> {
    /// Open a day's note. `today` pins the editability boundary for the
    /// whole session so a widget does not flip read-only mid-keystroke.
    pub fn open(store: &'a NotesStore, day: JalaliDate, today: JalaliDate, debounce: Duration) -> Self {
        Self {
            store,
            day,
            today,
            debounce,
            buffer: store.load_note(day),
            state: EditorState::Viewing,
        }
    }

    pub fn day(&self) -> JalaliDate {
        self.day
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_editable(&self) -> bool {
        is_editable(self.day, self.today)
    }

    pub fn has_pending_save(&self) -> bool {
        matches!(self.state, EditorState::PendingSave { .. })
    }

    /// Accept new text and (re-)arm the debounce deadline. Returns false
    /// without touching anything when the day is read-only.
    pub fn text_changed(&mut self, text: impl Into<String>, now: Instant) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.buffer = text.into();
        self.state = EditorState::PendingSave {
            deadline: now + self.debounce,
        };
        true
    }

    /// Commit the pending edit once its deadline has elapsed. Call on every
    /// timer tick; returns true when a write actually happened.
    pub fn poll(&mut self, now: Instant) -> Result<bool> {
        match self.state {
            EditorState::PendingSave { deadline } if now >= deadline => {
                self.commit()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Force any pending edit to disk immediately.
    pub fn flush(&mut self) -> Result<()> {
        if self.has_pending_save() {
            self.commit()?;
        }
        Ok(())
    }

    /// Switch to another day, committing any pending edit first.
    pub fn navigate(&mut self, day: JalaliDate) -> Result<()> {
        self.flush()?;
        self.day = day;
        self.buffer = self.store.load_note(day);
        self.state = EditorState::Viewing;
        Ok(())
    }

    /// Close the editor, committing any pending edit.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    fn commit(&mut self) -> Result<()> {
        self.store.save_note(self.day, &self.buffer)?;
        self.state = EditorState::Viewing;
        Ok(())
    }
}
