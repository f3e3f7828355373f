use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::gregorian::{Date, DateTime};
use crate::iso8601::{write_fraction, Scanner};
use crate::scale::{NS_PER_DAY, NS_PER_SEC, SEC_PER_HR, SEC_PER_MIN};
use crate::time_zone::TimeZone;

/// A time of day with nanosecond precision, independent of any date or zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl Time {
    pub const MIDNIGHT: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::out_of_range(format!("hour {hour}")));
        }
        if minute > 59 {
            return Err(Error::out_of_range(format!("min {minute}")));
        }
        if second > 59 {
            return Err(Error::out_of_range(format!("sec {second}")));
        }
        if nanosecond > 999_999_999 {
            return Err(Error::out_of_range(format!("ns {nanosecond}")));
        }
        Ok(Time {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Fields already known to be in range.
    pub(crate) const fn from_parts(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Time {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// Whole seconds since midnight.
    pub(crate) fn seconds_of_day(&self) -> i32 {
        self.hour as i32 * SEC_PER_HR as i32 + self.minute as i32 * SEC_PER_MIN as i32
            + self.second as i32
    }

    /// Time elapsed since midnight.
    pub fn to_duration(&self) -> Duration {
        Duration::new(self.seconds_of_day() as i64 * NS_PER_SEC + self.nanosecond as i64)
    }

    /// The time of day `d` after midnight. `d` must be less than one day.
    pub fn from_duration(d: Duration) -> Result<Self> {
        let ticks = d.ticks();
        if !(0..NS_PER_DAY).contains(&ticks) {
            return Err(Error::out_of_range(format!("Duration out of range: {d}")));
        }
        let secs = ticks / NS_PER_SEC;
        Ok(Time {
            hour: (secs / SEC_PER_HR) as u8,
            minute: (secs / SEC_PER_MIN % 60) as u8,
            second: (secs % 60) as u8,
            nanosecond: (ticks % NS_PER_SEC) as u32,
        })
    }

    /// Move forward by up to one day, wrapping around midnight.
    pub fn plus(&self, d: Duration) -> Result<Self> {
        let ticks = d.ticks();
        if ticks == 0 {
            return Ok(*self);
        }
        if ticks.unsigned_abs() > NS_PER_DAY as u64 {
            return Err(Error::out_of_range(format!("Duration out of range: {d}")));
        }
        let wrapped = (self.to_duration().ticks() + ticks).rem_euclid(NS_PER_DAY);
        Self::from_duration(Duration::new(wrapped))
    }

    pub fn minus(&self, d: Duration) -> Result<Self> {
        let neg = d
            .checked_neg()
            .ok_or_else(|| Error::out_of_range(format!("Duration out of range: {d}")))?;
        self.plus(neg)
    }

    pub fn to_date_time(&self, date: &Date, zone: Arc<TimeZone>) -> Result<DateTime> {
        DateTime::from_civil(date, self, zone)
    }

    /// Parse `hh:mm:ss` with an optional fraction of 1 to 9 digits.
    pub fn parse(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        let time = scanner
            .time()
            .filter(|_| scanner.at_end())
            .ok_or_else(|| Error::parse("Time", s))?;
        Ok(time)
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Time::parse(s)
    }
}

impl fmt::Display for Time {
    /// `hh:mm:ss`, followed by the fraction of a second without trailing zeros when it is not
    /// zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        write_fraction(f, self.nanosecond)
    }
}
