// Property tests for the calendar conversion and countdown arithmetic
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use exam_countdown::services::countdown;
use exam_countdown::utils::date::{self, JalaliDate};

proptest! {
    #[test]
    fn jalali_to_gregorian_round_trips(year in 1300i32..1500, month in 1u32..=12, day in 1u32..=31) {
        prop_assume!(day <= date::month_length(year, month));
        let jalali = JalaliDate::new(year, month, day).unwrap();
        let gregorian = jalali.to_gregorian();
        prop_assert_eq!(JalaliDate::from_gregorian(gregorian), jalali);
    }

    #[test]
    fn gregorian_to_jalali_round_trips(offset in 0i64..200 * 365) {
        let gregorian = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset);
        let jalali = JalaliDate::from_gregorian(gregorian);
        prop_assert_eq!(jalali.to_gregorian(), gregorian);
    }

    #[test]
    fn conversion_preserves_day_ordering(offset in 0i64..100 * 365) {
        let gregorian = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset);
        let today = JalaliDate::from_gregorian(gregorian);
        let tomorrow = JalaliDate::from_gregorian(gregorian + Duration::days(1));
        prop_assert!(today < tomorrow);
        prop_assert_eq!(today.succ(), tomorrow);
    }

    #[test]
    fn validate_date_never_panics(text in "\\PC*") {
        let _ = date::validate_date(&text);
    }

    #[test]
    fn validate_time_never_panics(hour in "\\PC*", minute in "\\PC*") {
        let _ = date::validate_time(&hour, &minute);
    }

    #[test]
    fn progress_stays_within_bounds(
        year in 1400i32..1450,
        month in 1u32..=12,
        day in 1u32..=29,
        now_offset_secs in -30i64 * 86_400..30 * 86_400,
    ) {
        let due = JalaliDate::new(year, month, day).unwrap();
        let now = due.to_gregorian().and_hms_opt(12, 0, 0).unwrap() + Duration::seconds(now_offset_secs);
        let countdown = countdown::compute(&due.to_string(), "12:00:00", now).unwrap();

        prop_assert!(countdown.progress_percent <= 100);
        if countdown.expired {
            prop_assert_eq!(countdown.days_remaining, 0);
            prop_assert_eq!(countdown.progress_percent, 100);
        } else {
            prop_assert_eq!(countdown.days_remaining, countdown.remaining_secs / 86_400);
        }
    }
}
