//! Countdown computation and display-row assembly.
//!
//! Parse failures never abort a load: a record whose date or time does not
//! parse is logged and skipped, and the remaining records still render.

use chrono::NaiveDateTime;

use super::models::{Countdown, DeadlineRow, UrgencyTier, FINISHED_LABEL};
use crate::models::deadline::DeadlineRecord;
use crate::utils::date::{start_of_day, JalaliDateTime};

const SECS_PER_DAY: i64 = 86_400;

/// Remaining-time breakdown for one stored date/time pair, or `None` when
/// the pair does not parse as a Jalali date-time.
pub fn compute(due_date: &str, due_time: &str, now: NaiveDateTime) -> Option<Countdown> {
    let due = match JalaliDateTime::parse(&format!("{due_date} {due_time}")) {
        Ok(dt) => dt.to_gregorian(),
        Err(err) => {
            log::warn!("skipping deadline with unparsable date/time {due_date} {due_time}: {err}");
            return None;
        }
    };

    let remaining_secs = (due - now).num_seconds();
    let window_secs = (due - start_of_day(now)).num_seconds();
    let elapsed_secs = window_secs - remaining_secs;
    let progress_percent = if window_secs > 0 {
        (100.0 * elapsed_secs as f64 / window_secs as f64)
            .round()
            .clamp(0.0, 100.0) as u8
    } else {
        100
    };

    if remaining_secs < 0 {
        return Some(Countdown {
            remaining_secs,
            expired: true,
            days_remaining: 0,
            progress_percent,
            label: FINISHED_LABEL.to_string(),
        });
    }

    let days = remaining_secs / SECS_PER_DAY;
    let hours = remaining_secs % SECS_PER_DAY / 3600;
    let minutes = remaining_secs % 3600 / 60;
    let seconds = remaining_secs % 60;

    Some(Countdown {
        remaining_secs,
        expired: false,
        days_remaining: days,
        progress_percent,
        label: format!("{days}:{hours:02}:{minutes:02}:{seconds:02}"),
    })
}

/// Build the sorted presentation rows for a set of records: incomplete
/// deadlines first, then soonest-due. Corrupt records are skipped.
pub fn rows(records: &[DeadlineRecord], now: NaiveDateTime) -> Vec<DeadlineRow> {
    let mut rows: Vec<DeadlineRow> = records
        .iter()
        .filter_map(|record| {
            let countdown = compute(&record.due_date, &record.due_time, now)?;
            Some(DeadlineRow {
                course: record.course.clone(),
                date_label: record.due_date.clone(),
                countdown_label: countdown.label,
                days_remaining: countdown.days_remaining,
                expired: countdown.expired,
                progress_percent: countdown.progress_percent,
                completed: record.completed,
                tier: UrgencyTier::for_record(countdown.days_remaining, record.completed),
            })
        })
        .collect();

    rows.sort_by_key(|row| (row.completed, row.days_remaining));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn exactly_two_days_out() {
        // Jalali 1403-03-12 = Gregorian 2024-06-01.
        let now = at(2024, 5, 30, 14, 0, 0);
        let countdown = compute("1403-03-12", "14:00:00", now).unwrap();
        assert!(!countdown.expired);
        assert_eq!(countdown.days_remaining, 2);
        assert_eq!(countdown.label, "2:00:00:00");
    }

    #[test]
    fn remainder_breakdown_is_zero_padded() {
        let now = at(2024, 6, 1, 12, 58, 53);
        let countdown = compute("1403-03-12", "14:00:00", now).unwrap();
        assert_eq!(countdown.label, "0:01:01:07");
        assert_eq!(countdown.days_remaining, 0);
    }

    #[test]
    fn past_due_is_expired_with_finished_label() {
        let now = at(2024, 6, 2, 9, 0, 0);
        let countdown = compute("1403-03-12", "14:00:00", now).unwrap();
        assert!(countdown.expired);
        assert_eq!(countdown.days_remaining, 0);
        assert_eq!(countdown.label, FINISHED_LABEL);
        assert_eq!(countdown.progress_percent, 100);
    }

    #[test]
    fn progress_stays_in_range() {
        let now = at(2024, 5, 30, 14, 0, 0);
        let countdown = compute("1403-03-12", "14:00:00", now).unwrap();
        // 50400 of 223200 window seconds elapsed.
        assert_eq!(countdown.progress_percent, 23);
    }

    #[test]
    fn due_at_start_of_today_reports_full_progress() {
        let now = at(2024, 6, 1, 0, 0, 0);
        let countdown = compute("1403-03-12", "00:00:00", now).unwrap();
        assert_eq!(countdown.progress_percent, 100);
        assert!(!countdown.expired);
        assert_eq!(countdown.remaining_secs, 0);
    }

    #[test]
    fn impossible_date_is_skipped() {
        let now = at(2024, 6, 1, 0, 0, 0);
        assert!(compute("1403-13-40", "10:00:00", now).is_none());
        assert!(compute("1403-03-12", "99:00:00", now).is_none());
    }

    #[test]
    fn rows_skip_corrupt_records_and_sort_by_urgency() {
        let now = at(2024, 5, 30, 14, 0, 0);
        let records = vec![
            DeadlineRecord::new("دور", "1403-04-20", "14:00:00"),
            DeadlineRecord::new("خراب", "1403-13-40", "14:00:00"),
            DeadlineRecord::new("نزدیک", "1403-03-12", "14:00:00"),
        ];
        let rows = rows(&records, now);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].course, "نزدیک");
        assert_eq!(rows[1].course, "دور");
    }

    #[test]
    fn completed_rows_sink_below_incomplete_ones() {
        let now = at(2024, 5, 30, 14, 0, 0);
        let mut done_soon = DeadlineRecord::new("تمام", "1403-03-12", "14:00:00");
        done_soon.completed = true;
        let records = vec![
            done_soon,
            DeadlineRecord::new("باز", "1403-04-20", "14:00:00"),
        ];
        let rows = rows(&records, now);
        assert_eq!(rows[0].course, "باز");
        assert_eq!(rows[1].course, "تمام");
        assert_eq!(rows[1].tier, UrgencyTier::Done);
    }
}
