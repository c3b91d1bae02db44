//! Calendar values carried by `QDate`, `QTime` and `QDateTime`.

use std::fmt;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

const MSECS_PER_SEC: u32 = 1_000;
const MSECS_PER_MIN: u32 = 60_000;
const MSECS_PER_HOUR: u32 = 3_600_000;
const MSECS_PER_DAY: u32 = 86_400_000;

/// Integer division rounding toward negative infinity, for either sign of
/// either operand.
pub fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// There is no year zero: the year before 1 is -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Converts a Julian day number.
    pub fn from_julian_day(julian: i64) -> Self {
        let a = i128::from(julian) + 32044;
        let b = floor_div(4 * a + 3, 146_097);
        let c = a - floor_div(146_097 * b, 4);
        let d = floor_div(4 * c + 3, 1461);
        let e = c - floor_div(1461 * d, 4);
        let m = floor_div(5 * e + 2, 153);

        let day = e - floor_div(153 * m + 2, 5) + 1;
        let month = m + 3 - 12 * floor_div(m, 10);
        let mut year = 100 * b + d - 4800 + floor_div(m, 10);
        if year <= 0 {
            year -= 1;
        }

        // day is 1..=31 and month 1..=12 by construction; year is bounded by
        // |julian| / 365.
        Self {
            year: year as i64,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Converts to a chrono date, which counts years astronomically (with a
    /// year zero). Returns `None` outside chrono's supported range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let astronomical = if self.year < 0 { self.year + 1 } else { self.year };
        NaiveDate::from_ymd_opt(i32::try_from(astronomical).ok()?, self.month, self.day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

/// A time of day, stored as milliseconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    msecs: u32,
}

impl Time {
    pub fn from_msecs_since_midnight(msecs: u32) -> Self {
        Self { msecs }
    }

    pub fn msecs_since_midnight(&self) -> u32 {
        self.msecs
    }

    pub fn hour(&self) -> u32 {
        self.msecs / MSECS_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        (self.msecs / MSECS_PER_MIN) % 60
    }

    pub fn second(&self) -> u32 {
        (self.msecs / MSECS_PER_SEC) % 60
    }

    pub fn msec(&self) -> u32 {
        self.msecs % MSECS_PER_SEC
    }

    /// Returns `true` if the value lies within a single day. Qt writes
    /// `0xFFFFFFFF` for an invalid `QTime`.
    pub fn is_valid(&self) -> bool {
        self.msecs < MSECS_PER_DAY
    }

    /// The time as an offset from midnight.
    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.msecs))
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.is_valid() {
            return None;
        }
        NaiveTime::from_num_seconds_from_midnight_opt(
            self.msecs / MSECS_PER_SEC,
            self.msec() * 1_000_000,
        )
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.msec()
        )
    }
}

/// The zone a [`DateTime`] is anchored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSpec {
    LocalTime,
    Utc,
}

impl TimeSpec {
    /// Decodes the wire flag: zero is local time, anything else is UTC.
    pub fn from_flag(flag: u8) -> Self {
        if flag == 0 { Self::LocalTime } else { Self::Utc }
    }
}

/// A date and time of day anchored in a zone.
///
/// Two values with the same date and time but different [`TimeSpec`] denote
/// different instants and compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
    pub spec: TimeSpec,
}

impl DateTime {
    /// Returns the instant: midnight of `date` in the anchoring zone, plus
    /// `time`.
    ///
    /// Returns `None` if the date is outside chrono's range, or if local
    /// midnight does not exist on that day.
    pub fn to_utc(&self) -> Option<chrono::DateTime<Utc>> {
        let midnight = self.date.to_naive_date()?.and_hms_opt(0, 0, 0)?;
        let start = match self.spec {
            TimeSpec::Utc => Utc.from_utc_datetime(&midnight),
            TimeSpec::LocalTime => Local
                .from_local_datetime(&midnight)
                .earliest()?
                .with_timezone(&Utc),
        };
        start.checked_add_signed(TimeDelta::milliseconds(i64::from(
            self.time.msecs_since_midnight(),
        )))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spec {
            TimeSpec::LocalTime => write!(f, "{}T{}", self.date, self.time),
            TimeSpec::Utc => write!(f, "{}T{}Z", self.date, self.time),
        }
    }
}
