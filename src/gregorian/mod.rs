//! Proleptic Gregorian calendar arithmetic and the civil value types built on it.

use crate::error::{Error, Result};
use crate::gregorian_normalized_date::epoch_day;

mod date;
mod date_time;
mod date_time_builder;
mod month;
pub(crate) mod tables;
mod time;
mod weekday;

pub use date::Date;
pub use date_time::DateTime;
pub use date_time_builder::DateTimeBuilder;
pub use month::Month;
pub use time::Time;
pub use weekday::Weekday;

/// Earliest year a [`DateTime`] can represent.
pub const MIN_YEAR: i32 = 1901;
/// Latest year a [`DateTime`] can represent.
pub const MAX_YEAR: i32 = 2099;

/// Earliest year a [`Date`] can hold.
pub const MIN_DATE_YEAR: i32 = 0;
/// Latest year a [`Date`] can hold.
pub const MAX_DATE_YEAR: i32 = 9999;

pub fn is_leap_year(year: i32) -> bool {
    tables::is_leap_year(year)
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    month.num_days(year)
}

/// 0-based day of the year, so January 1st is 0.
pub fn day_of_year(year: i32, month: Month, day: u8) -> Result<u16> {
    check_day(year, month, day)?;
    Ok(tables::day_of_year(year, month.ordinal(), day))
}

/// Day of the month of the `pos`th `weekday` in a month: 1 is the first, 2 the second, -1 the
/// last, -2 the second to last and so on.
///
/// ```
/// use tempora::{weekday_in_month, Month, Weekday};
/// assert_eq!(weekday_in_month(2024, Month::Feb, Weekday::Thu, -1).unwrap(), 29);
/// assert_eq!(weekday_in_month(2024, Month::Nov, Weekday::Thu, 4).unwrap(), 28);
/// ```
pub fn weekday_in_month(year: i32, month: Month, weekday: Weekday, pos: i32) -> Result<u8> {
    check_year(year)?;
    if pos == 0 {
        return Err(Error::out_of_range("Pos is zero"));
    }
    // No month holds more than five of any weekday.
    if pos.unsigned_abs() > 5 {
        return Err(Error::out_of_range(format!("Pos out of range {pos}")));
    }
    let day = tables::weekday_in_month(year, month.ordinal(), weekday.ordinal(), pos);
    if day < 1 || day > month.num_days(year) as i32 {
        return Err(Error::out_of_range(format!("Pos out of range {pos}")));
    }
    Ok(day as u8)
}

/// 1-based week of the year. The first week runs from January 1st up to the day before the
/// first `start_of_week`, so it may be shorter than seven days.
pub fn week_of_year(year: i32, month: Month, day: u8, start_of_week: Weekday) -> Result<u8> {
    check_day(year, month, day)?;
    Ok(week_number(year, month, day, start_of_week))
}

/// [`week_of_year`] for a validated date.
pub(crate) fn week_number(year: i32, month: Month, day: u8, start_of_week: Weekday) -> u8 {
    let first = weekday_of(year, 0, 1).ordinal() as i32;
    let start = start_of_week.ordinal() as i32;
    let last_day_in_first_week = (start - first + 6).rem_euclid(7) + 1;
    if month == Month::Jan && (day as i32) <= last_day_in_first_week {
        return 1;
    }
    let doy = tables::day_of_year(year, month.ordinal(), day) as i32 + 1;
    ((doy - last_day_in_first_week - 1) / 7 + 2) as u8
}

/// Weekday of a validated date in any year.
pub(crate) fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    // 2000-01-01 was a Saturday.
    let ordinal = (epoch_day(year, month, day) + 6).rem_euclid(7) as u8;
    Weekday::ALL[ordinal as usize]
}

pub(crate) fn check_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::out_of_range(format!("Year out of range {year}")));
    }
    Ok(())
}

/// Years a [`Date`] can hold: those with four digits in `YYYY-MM-DD`.
pub(crate) fn check_date_year(year: i64) -> Result<i32> {
    if !(MIN_DATE_YEAR as i64..=MAX_DATE_YEAR as i64).contains(&year) {
        return Err(Error::out_of_range(format!("Year out of range {year}")));
    }
    Ok(year as i32)
}

pub(crate) fn check_day(year: i32, month: Month, day: u8) -> Result<()> {
    if day < 1 || day > month.num_days(year) {
        return Err(Error::out_of_range(format!("day {day} of {month} {year}")));
    }
    Ok(())
}
