use std::sync::Arc;

use crate::error::{Error, Result};
use crate::gregorian::{Date, DateTime, Month, Time};
use crate::instant::compose;
use crate::time_zone::TimeZone;

/// Field-by-field construction of a [`DateTime`]. Only the year is required; the month
/// defaults to January, the day to the 1st and the time of day to midnight.
#[derive(Default)]
pub struct DateTimeBuilder {
    zone: Option<Arc<TimeZone>>,
    year: Option<i32>,
    month: Option<Month>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    millisecond: Option<u16>,
    microsecond: Option<u16>,
    nanosecond: Option<u16>,
    offset: Option<i32>,
}

impl DateTimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to UTC.
    pub fn zone(&mut self, zone: Arc<TimeZone>) -> &mut Self {
        self.zone = Some(zone);
        self
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: Month) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn day(&mut self, day: u8) -> &mut Self {
        self.day = Some(day);
        self
    }

    pub fn hour(&mut self, hour: u8) -> &mut Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(&mut self, minute: u8) -> &mut Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(&mut self, second: u8) -> &mut Self {
        self.second = Some(second);
        self
    }

    // The sub-second fields add up to the fraction of the second.

    pub fn millisecond(&mut self, millisecond: u16) -> &mut Self {
        self.millisecond = Some(millisecond);
        self
    }

    pub fn microsecond(&mut self, microsecond: u16) -> &mut Self {
        self.microsecond = Some(microsecond);
        self
    }

    pub fn nanosecond(&mut self, nanosecond: u16) -> &mut Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// The total UTC offset in seconds, when it is already known. Without it the offset comes
    /// from the zone's rules.
    pub fn offset(&mut self, offset: i32) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn build(&self) -> Result<DateTime> {
        let year = self
            .year
            .ok_or_else(|| Error::out_of_range("No year provided"))?;
        let date = Date::new(year, self.month.unwrap_or(Month::Jan), self.day.unwrap_or(1))?;

        let millisecond = self.millisecond.unwrap_or(0);
        let microsecond = self.microsecond.unwrap_or(0);
        let nanosecond = self.nanosecond.unwrap_or(0);
        if millisecond >= 1000 || microsecond >= 1000 || nanosecond >= 1000 {
            return Err(Error::out_of_range(format!(
                "fraction {millisecond}ms {microsecond}us {nanosecond}ns"
            )));
        }
        let nanosecond =
            millisecond as u32 * 1_000_000 + microsecond as u32 * 1_000 + nanosecond as u32;
        let time = Time::new(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            nanosecond,
        )?;

        let zone = self.zone.clone().unwrap_or_else(TimeZone::utc);
        let (ticks, _) = compose(&date, &time, &zone, self.offset)?;
        DateTime::from_ticks(ticks, zone)
    }
}
