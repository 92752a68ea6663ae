//! Jalali (Shamsi) calendar arithmetic and validation.
//!
//! Conversion between Jalali and Gregorian dates runs over integer
//! Julian-day-number math using the 33-year-cycle break table, so no
//! floating point is involved. Gregorian types only appear at the edges
//! where "now" enters via chrono.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Years at which the length of the 33-year leap cycle changes.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Supported Jalali year range. The break table covers [-61, 3178); years
/// before 1 are of no use to this application.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 3177;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("date must be three dash-separated numbers, got {0:?}")]
    Malformed(String),
    #[error("no such Jalali date: {year}-{month}-{day}")]
    OutOfRange { year: i32, month: u32, day: u32 },
    #[error("time must match HH:MM:SS, got {0:?}")]
    BadTime(String),
}

/// A date on the Jalali calendar. Ordering is calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Build a date, rejecting impossible calendar days (month 0/13,
    /// Esfand 30 in a common year, and so on).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let valid = (MIN_YEAR..=MAX_YEAR).contains(&year)
            && (1..=12).contains(&month)
            && day >= 1
            && day <= month_length(year, month);
        if valid {
            Ok(Self { year, month, day })
        } else {
            Err(DateError::OutOfRange { year, month, day })
        }
    }

    /// Parse `YYYY-MM-DD` text. Exactly three dash-separated integer parts;
    /// anything else is malformed.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let parts: Vec<&str> = text.split('-').collect();
        if parts.len() != 3 {
            return Err(DateError::Malformed(text.to_string()));
        }
        let year: i32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| DateError::Malformed(text.to_string()))?;
        let month: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| DateError::Malformed(text.to_string()))?;
        let day: u32 = parts[2]
            .trim()
            .parse()
            .map_err(|_| DateError::Malformed(text.to_string()))?;
        Self::new(year, month, day)
    }

    pub fn to_gregorian(self) -> NaiveDate {
        let (gy, gm, gd) = d2g(j2d(self.year, self.month, self.day));
        // The converter only emits real Gregorian dates for in-range input.
        NaiveDate::from_ymd_opt(gy, gm, gd).unwrap()
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        use chrono::Datelike;
        let (jy, jm, jd) = d2j(g2d(date.year(), date.month(), date.day()));
        Self {
            year: jy,
            month: jm,
            day: jd,
        }
    }

    /// Today on the local clock.
    pub fn today() -> Self {
        Self::from_gregorian(Local::now().date_naive())
    }

    pub fn succ(self) -> Self {
        Self::from_gregorian(self.to_gregorian() + chrono::Duration::days(1))
    }
}

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A Jalali date with a time of day attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JalaliDateTime {
    pub date: JalaliDate,
    pub time: NaiveTime,
}

impl JalaliDateTime {
    /// Parse the fixed `YYYY-MM-DD HH:MM:SS` layout.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let (date_part, time_part) = text
            .split_once(' ')
            .ok_or_else(|| DateError::Malformed(text.to_string()))?;
        let date = JalaliDate::parse(date_part)?;
        let time = NaiveTime::parse_from_str(time_part.trim(), "%H:%M:%S")
            .map_err(|_| DateError::BadTime(time_part.to_string()))?;
        Ok(Self { date, time })
    }

    pub fn to_gregorian(self) -> NaiveDateTime {
        self.date.to_gregorian().and_time(self.time)
    }
}

/// True iff both strings parse as integers with hour 0-23 and minute 0-59.
pub fn validate_time(hour: &str, minute: &str) -> bool {
    let h: Result<i32, _> = hour.trim().parse();
    let m: Result<i32, _> = minute.trim().parse();
    match (h, m) {
        (Ok(h), Ok(m)) => (0..=23).contains(&h) && (0..=59).contains(&m),
        _ => false,
    }
}

/// True iff the text denotes a real Jalali calendar day.
pub fn validate_date(text: &str) -> bool {
    JalaliDate::parse(text).is_ok()
}

pub fn is_leap_year(year: i32) -> bool {
    jal_cal_leap(year) == 0
}

/// Days in the given Jalali month.
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

pub fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_hms_opt(0, 0, 0).unwrap()
}

// ── Julian-day-number conversion ───────────────────────────────────

/// Leap offset of a Jalali year within its cycle; 0 means a leap year.
fn jal_cal_leap(jy: i32) -> i32 {
    let (_, _, jump, jp) = walk_breaks(jy);
    let mut n = jy - jp;
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }
    leap
}

/// Leap state, Gregorian year, and the March day of Farvardin 1st.
fn jal_cal(jy: i32) -> (i32, i32, i32) {
    let (mut leap_j, gy, jump, jp) = walk_breaks(jy);
    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }
    (leap, gy, march)
}

/// Shared walk over the break table; returns the accumulated Julian leap
/// count, the Gregorian year, and the active cycle segment.
fn walk_breaks(jy: i32) -> (i32, i32, i32, i32) {
    debug_assert!(jy >= BREAKS[0] && jy < BREAKS[BREAKS.len() - 1]);
    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    (leap_j, gy, jump, jp)
}

/// Jalali date to Julian day number.
fn j2d(jy: i32, jm: u32, jd: u32) -> i64 {
    let (_, gy, march) = jal_cal(jy);
    let jm = jm as i64;
    g2d(gy, 3, march as u32) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd as i64 - 1
}

/// Julian day number to Jalali date.
fn d2j(jdn: i64) -> (i32, u32, u32) {
    let (gy, _, _) = d2g(jdn);
    let mut jy = gy - 621;
    let (leap, _, march) = jal_cal(jy);
    let jdn1f = g2d(gy, 3, march as u32);
    let mut k = jdn - jdn1f;
    if k >= 0 {
        if k <= 185 {
            return (jy, 1 + (k / 31) as u32, (k % 31 + 1) as u32);
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if leap == 1 {
            k += 1;
        }
    }
    (jy, 7 + (k / 30) as u32, (k % 30 + 1) as u32)
}

/// Gregorian date to Julian day number.
fn g2d(gy: i32, gm: u32, gd: u32) -> i64 {
    let (gy, gm, gd) = (gy as i64, gm as i64, gd as i64);
    let d = 1461 * (gy + (gm - 8) / 6 + 100100) / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Julian day number to Gregorian date.
fn d2g(jdn: i64) -> (i32, u32, u32) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = (i % 153 / 5 + 1) as u32;
    let gm = (i / 153 % 12 + 1) as u32;
    let gy = (j / 1461 - 100100 + (8 - gm as i64) / 6) as i32;
    (gy, gm, gd)
}
