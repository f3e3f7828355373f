use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::gregorian::{
    check_date_year, check_day, tables, week_number, weekday_of, DateTime, Month, Time, Weekday,
};
use crate::gregorian_normalized_date::{date_of_epoch_day, epoch_day};
use crate::iso8601::Scanner;
use crate::scale::NS_PER_DAY;
use crate::time_zone::TimeZone;

/// A calendar date without a time of day or zone.
///
/// Dates cover the years 0 to 9999 of the proleptic Gregorian calendar, the years that
/// `YYYY-MM-DD` can write. Only years 1901 to 2099 can be combined with a time into a
/// [`DateTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u8,
}

impl Date {
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self> {
        check_date_year(year as i64)?;
        check_day(year, month, day)?;
        Ok(Date { year, month, day })
    }

    /// Fields already known to form a valid date.
    pub(crate) const fn from_parts(year: i32, month: Month, day: u8) -> Self {
        Date { year, month, day }
    }

    /// The date `day` days after 2000-01-01.
    pub(crate) fn from_epoch_day(day: i64) -> Result<Self> {
        let (year, month, day) = date_of_epoch_day(day);
        Ok(Date {
            year: check_date_year(year)?,
            month: Month::ALL[month as usize],
            day,
        })
    }

    pub(crate) fn epoch_day(&self) -> i64 {
        epoch_day(self.year, self.month.ordinal(), self.day)
    }

    /// Today's date in `zone`.
    pub fn today(zone: Arc<TimeZone>) -> Result<Self> {
        Ok(DateTime::now(zone)?.date())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month.ordinal(), self.day)
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u16 {
        tables::day_of_year(self.year, self.month.ordinal(), self.day) + 1
    }

    pub fn week_of_year(&self, start_of_week: Weekday) -> u8 {
        week_number(self.year, self.month, self.day, start_of_week)
    }

    pub fn first_of_month(&self) -> Self {
        Date { day: 1, ..*self }
    }

    pub fn last_of_month(&self) -> Self {
        Date {
            day: self.month.num_days(self.year),
            ..*self
        }
    }

    /// Move by a whole number of days.
    pub fn plus(&self, d: Duration) -> Result<Self> {
        let ticks = d.ticks();
        if ticks % NS_PER_DAY != 0 {
            return Err(Error::out_of_range(format!(
                "Duration must be whole days: {d}"
            )));
        }
        Self::from_epoch_day(self.epoch_day() + ticks / NS_PER_DAY)
    }

    pub fn minus(&self, d: Duration) -> Result<Self> {
        let neg = d
            .checked_neg()
            .ok_or_else(|| Error::out_of_range(format!("Duration must be whole days: {d}")))?;
        self.plus(neg)
    }

    /// Whole days from `other` to `self`.
    pub fn minus_date(&self, other: &Date) -> Duration {
        Duration::new((self.epoch_day() - other.epoch_day()) * NS_PER_DAY)
    }

    pub fn to_date_time(&self, time: &Time, zone: Arc<TimeZone>) -> Result<DateTime> {
        DateTime::from_civil(self, time, zone)
    }

    /// The start of this date in `zone`.
    pub fn midnight(&self, zone: Arc<TimeZone>) -> Result<DateTime> {
        DateTime::from_civil(self, &Time::MIDNIGHT, zone)
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        scanner
            .date()
            .filter(|_| scanner.at_end())
            .ok_or_else(|| Error::parse("Date", s))
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.ordinal() + 1,
            self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::{MAX_DATE_YEAR, MIN_DATE_YEAR};
    use proptest::prelude::*;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn validates_day_of_month() {
        assert!(Date::new(2024, Month::Feb, 29).is_ok());
        assert!(Date::new(2023, Month::Feb, 29).is_err());
        assert!(Date::new(2024, Month::Apr, 31).is_err());
        assert!(Date::new(2024, Month::Jan, 0).is_err());
    }

    #[test]
    fn formats_and_parses() {
        let d = date(2024, Month::Mar, 5);
        assert_eq!(d.to_string(), "2024-03-05");
        assert_eq!(Date::parse("2024-03-05"), Ok(d));
        assert_eq!("1901-12-31".parse::<Date>(), Ok(date(1901, Month::Dec, 31)));
    }

    #[test]
    fn rejects_malformed_text() {
        for s in [
            "", "2024-3-05", "2024-03-5", "24-03-05", "2024/03/05", "2024-13-01", "2023-02-29",
            "2024-03-05T", "2024-03-0x",
        ] {
            assert_eq!(Date::parse(s), Err(Error::parse("Date", s)), "{s}");
        }
    }

    #[test]
    fn day_arithmetic() {
        let d = date(2024, Month::Feb, 28);
        assert_eq!(d.plus(Duration::ONE_DAY), Ok(date(2024, Month::Feb, 29)));
        assert_eq!(d.plus(Duration::ONE_DAY * 2), Ok(date(2024, Month::Mar, 1)));
        assert_eq!(d.minus(Duration::ONE_DAY * 365), Ok(date(2023, Month::Feb, 28)));
        assert_eq!(
            date(1999, Month::Dec, 31).plus(Duration::ONE_DAY),
            Ok(date(2000, Month::Jan, 1))
        );
        assert!(d.plus(Duration::from_secs(3600)).is_err());
        assert_eq!(
            date(2024, Month::Mar, 1).minus_date(&d),
            Duration::ONE_DAY * 2
        );
        assert_eq!(d.minus_date(&date(2024, Month::Mar, 1)), Duration::NEG_ONE_DAY * 2);
    }

    #[test]
    fn stays_within_four_digit_years() {
        assert!(Date::new(-1, Month::Jan, 1).is_err());
        assert!(Date::new(10_000, Month::Jan, 1).is_err());
        assert_eq!(date(0, Month::Jan, 1).to_string(), "0000-01-01");
        assert_eq!(Date::parse("0000-01-01"), Ok(date(0, Month::Jan, 1)));

        let last = date(9999, Month::Dec, 31);
        assert!(matches!(last.plus(Duration::ONE_DAY), Err(Error::OutOfRange(_))));
        assert!(matches!(
            date(0, Month::Jan, 1).minus(Duration::ONE_DAY),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(last.plus(Duration::MAX), Err(Error::OutOfRange(_))));
        assert!(matches!(last.minus(Duration::MIN), Err(Error::OutOfRange(_))));
        // The largest whole-day duration still lands inside the calendar from the middle.
        let days = Duration::MAX.to_days();
        assert!(date(5000, Month::Jan, 1).plus(Duration::ONE_DAY * days).is_ok());
    }

    #[test]
    fn calendar_queries() {
        let d = date(2024, Month::Feb, 29);
        assert_eq!(d.weekday(), Weekday::Thu);
        assert_eq!(d.day_of_year(), 60);
        assert_eq!(d.first_of_month(), date(2024, Month::Feb, 1));
        assert_eq!(d.last_of_month(), d);
        assert_eq!(date(2023, Month::Feb, 3).last_of_month(), date(2023, Month::Feb, 28));
        assert_eq!(date(2024, Month::Jan, 7).week_of_year(Weekday::Sun), 2);
        assert_eq!(date(1850, Month::Jan, 1).weekday(), Weekday::Tue);
    }

    #[test]
    fn orders_chronologically() {
        assert!(date(2024, Month::Jan, 31) < date(2024, Month::Feb, 1));
        assert!(date(2023, Month::Dec, 31) < date(2024, Month::Jan, 1));
    }

    proptest! {
        #[test]
        fn text_round_trip(year in MIN_DATE_YEAR..=MAX_DATE_YEAR, month in 0u8..12, day in 1u8..=31) {
            let month = Month::ALL[month as usize];
            prop_assume!(day <= month.num_days(year));
            let d = date(year, month, day);
            prop_assert_eq!(Date::parse(&d.to_string()), Ok(d));
        }

        #[test]
        fn epoch_day_round_trip(day in -730_485i64..=2_921_939) {
            // 0000-01-01 to 9999-12-31
            prop_assert_eq!(Date::from_epoch_day(day).unwrap().epoch_day(), day);
        }
    }
}
