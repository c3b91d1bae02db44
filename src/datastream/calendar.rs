//! `QDate`, `QTime` and `QDateTime` fields.

use std::io::Read;

use super::reader::StreamReader;
use crate::error::Result;
use crate::types::{Date, DateTime, Time, TimeSpec};

impl<R: Read> StreamReader<R> {
    /// Reads a Julian day number and converts it to a Gregorian date.
    pub fn read_date(&mut self) -> Result<Date> {
        // Qt writes a signed qint64.
        let julian = self.read_u64()? as i64;
        Ok(Date::from_julian_day(julian))
    }

    /// Reads milliseconds since midnight.
    pub fn read_time(&mut self) -> Result<Time> {
        Ok(Time::from_msecs_since_midnight(self.read_u32()?))
    }

    /// Reads a date, a time and a one-byte zone flag (0 = local, else UTC).
    pub fn read_date_time(&mut self) -> Result<DateTime> {
        let date = self.read_date()?;
        let time = self.read_time()?;
        let spec = TimeSpec::from_flag(self.read_u8()?);
        Ok(DateTime { date, time, spec })
    }
}
