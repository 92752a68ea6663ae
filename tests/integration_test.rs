// Integration tests for document persistence and the load → render pipeline
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tempfile::tempdir;

use exam_countdown::models::deadline::DeadlineRecord;
use exam_countdown::services::countdown;
use exam_countdown::services::deadline::DeadlineStore;
use exam_countdown::services::notes::{NoteEditor, NotesStore};
use exam_countdown::utils::date::JalaliDate;

#[test]
fn test_deadline_lifecycle_across_restarts() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deadlines.json");

    // Simulate first app launch
    {
        let store = DeadlineStore::new(&path);
        let records = vec![
            DeadlineRecord::new("ریاضی مهندسی", "1403-04-20", "14:00:00"),
            DeadlineRecord::new("فیزیک ۲", "1403-03-12", "08:00:00"),
        ];
        store.save_all(&records).expect("Failed to save deadlines");
        store
            .set_completed("فیزیک ۲", true)
            .expect("Failed to set completion");
    } // Store dropped, nothing held in memory

    // Simulate second app launch - records should persist
    {
        let store = DeadlineStore::new(&path);
        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course, "ریاضی مهندسی");
        assert!(!records[0].completed);
        assert!(records[1].completed, "Completion should persist across restarts");
    }
}

#[test]
fn test_bad_row_does_not_abort_the_rest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("deadlines.json");

    // A document with one impossible date between two good rows.
    let document = r#"[
        {"course": "جبر", "deadline_shamsi": "1403-04-20", "deadline_time": "10:00:00", "checked": "0"},
        {"course": "خراب", "deadline_shamsi": "1403-13-40", "deadline_time": "10:00:00", "checked": "0"},
        {"course": "آمار", "deadline_shamsi": "1403-05-01", "deadline_time": "10:00:00", "checked": "0"}
    ]"#;
    std::fs::write(&path, document).expect("Failed to write document");

    let store = DeadlineStore::new(&path);
    let records = store.load();
    assert_eq!(records.len(), 3, "The store loads rows verbatim");

    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let rows = countdown::rows(&records, now);
    assert_eq!(rows.len(), 2, "Only the parsable rows reach the renderer");
    assert!(rows.iter().all(|row| row.course != "خراب"));
}

#[test]
fn test_notes_survive_restart_and_respect_the_notes_area() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notes_path = dir.path().join("notes").join("notes.json");
    let day = JalaliDate::new(1403, 4, 20).unwrap();

    {
        let store = NotesStore::new(&notes_path);
        store
            .save_note(day, "تمرین‌های فصل چهارم")
            .expect("Failed to save note");
    }

    {
        let store = NotesStore::new(&notes_path);
        assert_eq!(store.load_note(day), "تمرین‌های فصل چهارم");
    }
}

#[test]
fn test_editor_flush_on_close_is_never_lost() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = NotesStore::new(dir.path().join("notes.json"));
    let today = JalaliDate::new(1403, 4, 20).unwrap();

    let mut editor = NoteEditor::open(&store, today, today, Duration::from_millis(1500));
    editor.text_changed("جمع‌بندی قبل از امتحان", Instant::now());
    // Window closes before the debounce elapses.
    editor.close().expect("Failed to flush on close");

    let reopened = NoteEditor::open(&store, today, today, Duration::from_millis(1500));
    assert_eq!(reopened.text(), "جمع‌بندی قبل از امتحان");
}
