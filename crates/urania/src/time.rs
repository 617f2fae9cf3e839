//! Birth date/time to Julian Day conversion.
//!
//! Accepts the calendar shapes the profile layer produces (`DD.MM.YYYY` and
//! `YYYY-MM-DD`) plus an `HH:MM` clock. The clock is read as UTC.
//! Unparseable input never fails: it degrades to the J2000.0 epoch.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2451545.0;

/// Julian Day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// J2000.0 in milliseconds since the Unix epoch.
const J2000_UNIX_MILLIS: i64 = 946_728_000_000;

/// Offsets beyond this lie outside chrono's representable range anyway.
const MAX_OFFSET_MILLIS: f64 = 1e16;

lazy_static! {
    static ref DOTTED_DATE: Regex =
        Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{1,4})$").expect("dotted date pattern");
    static ref ISO_DATE: Regex =
        Regex::new(r"^(\d{1,4})-(\d{1,2})-(\d{1,2})$").expect("iso date pattern");
    static ref CLOCK_TIME: Regex =
        Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("clock time pattern");
}

/// A Julian Day together with the UTC instant it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JulianMoment {
    pub julian_day: f64,
    pub utc_instant: DateTime<Utc>,
    /// True when the input could not be parsed and J2000.0 was substituted.
    pub fallback: bool,
}

impl JulianMoment {
    /// The J2000.0 moment used when birth input is unusable.
    pub fn j2000_fallback() -> Self {
        Self {
            julian_day: J2000_JD,
            utc_instant: DateTime::<Utc>::default() + Duration::milliseconds(J2000_UNIX_MILLIS),
            fallback: true,
        }
    }

    /// Build a moment from an already validated calendar date and clock time.
    pub fn from_calendar(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            julian_day: julian_day_from_calendar(date, time),
            utc_instant: Utc.from_utc_datetime(&NaiveDateTime::new(date, time)),
            fallback: false,
        }
    }
}

/// Convert birth date and time strings into a Julian moment.
///
/// Missing, non-numeric or out-of-range components yield
/// [`JulianMoment::j2000_fallback`] instead of an error.
pub fn to_julian_day(date: &str, time: &str) -> JulianMoment {
    match (parse_date(date), parse_time(time)) {
        (Some(d), Some(t)) => JulianMoment::from_calendar(d, t),
        _ => {
            log::warn!(
                "Unparseable birth date/time (date={:?}, time={:?}); using J2000.0",
                date,
                time
            );
            JulianMoment::j2000_fallback()
        }
    }
}

/// Parse `DD.MM.YYYY` or `YYYY-MM-DD` into a calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    let (year, month, day) = if let Some(caps) = DOTTED_DATE.captures(date) {
        (caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)
    } else if let Some(caps) = ISO_DATE.captures(date) {
        (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    } else {
        return None;
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an `HH:MM` clock time (hour 0..=23, minute 0..=59).
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let caps = CLOCK_TIME.captures(time.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Gregorian calendar date and clock time to Julian Day.
///
/// Integer day number from the civil-to-Julian formula, plus the day
/// fraction counted from noon.
pub fn julian_day_from_calendar(date: NaiveDate, time: NaiveTime) -> f64 {
    let year = date.year() as i64;
    let month = date.month() as i64;
    let day = date.day() as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let day_number = day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    let hours = time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;
    day_number as f64 + (hours - 12.0) / 24.0
}

/// Julian Day back to a UTC instant, at millisecond resolution.
///
/// `None` for non-finite days and days outside the representable calendar.
pub fn julian_day_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > MAX_OFFSET_MILLIS {
        return None;
    }
    DateTime::<Utc>::default().checked_add_signed(Duration::milliseconds(millis as i64))
}
