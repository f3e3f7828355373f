//! Lookup tables for the years a [`DateTime`](crate::DateTime) can reach, built once on first
//! use. They extend one year past each end of the valid DateTime range because applying a zone
//! offset to an instant near either end can cross into the neighbouring year.

use lazy_static::lazy_static;
use num_integer::Integer;

use crate::scale::{NS_PER_DAY, NS_PER_YEAR};

pub(crate) const FIRST_TABLE_YEAR: i32 = 1900;
pub(crate) const LAST_TABLE_YEAR: i32 = 2101;
const TABLE_YEARS: usize = (LAST_TABLE_YEAR - FIRST_TABLE_YEAR + 1) as usize;

/// Ticks of 1900-01-01T00:00:00Z relative to the 2000 epoch.
const FIRST_YEAR_TICKS: i64 = -3_155_673_600_000_000_000;
/// 1900-01-01 was a Monday.
const FIRST_YEAR_WEEKDAY: u8 = 1;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const DAYS_IN_MONTH_LEAP: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const FIRST_DAY_OF_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const FIRST_DAY_OF_MONTH_LEAP: [u16; 12] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

struct YearTables {
    ticks: [i64; TABLE_YEARS],
    first_weekday: [u8; TABLE_YEARS],
}

impl YearTables {
    fn build() -> Self {
        let mut ticks = [0i64; TABLE_YEARS];
        let mut first_weekday = [0u8; TABLE_YEARS];
        ticks[0] = FIRST_YEAR_TICKS;
        first_weekday[0] = FIRST_YEAR_WEEKDAY;
        for i in 1..TABLE_YEARS {
            let days_in_prev = if is_leap_year(FIRST_TABLE_YEAR + i as i32 - 1) {
                366
            } else {
                365
            };
            ticks[i] = ticks[i - 1] + days_in_prev * NS_PER_DAY;
            first_weekday[i] = ((first_weekday[i - 1] as i64 + days_in_prev) % 7) as u8;
        }
        YearTables {
            ticks,
            first_weekday,
        }
    }
}

/// Month and day-of-month for each 0-based day of the year.
struct DayOfYearTables {
    month: [u8; 365],
    day: [u8; 365],
    month_leap: [u8; 366],
    day_leap: [u8; 366],
}

impl DayOfYearTables {
    fn build() -> Self {
        fn fill(days_in_month: &[u8; 12], months: &mut [u8], days: &mut [u8]) {
            let mut doy = 0;
            for (month, &len) in days_in_month.iter().enumerate() {
                for day in 1..=len {
                    months[doy] = month as u8;
                    days[doy] = day;
                    doy += 1;
                }
            }
        }
        let mut tables = DayOfYearTables {
            month: [0; 365],
            day: [0; 365],
            month_leap: [0; 366],
            day_leap: [0; 366],
        };
        fill(&DAYS_IN_MONTH, &mut tables.month, &mut tables.day);
        fill(
            &DAYS_IN_MONTH_LEAP,
            &mut tables.month_leap,
            &mut tables.day_leap,
        );
        tables
    }
}

lazy_static! {
    static ref YEARS: YearTables = YearTables::build();
    static ref DAYS_OF_YEAR: DayOfYearTables = DayOfYearTables::build();
}

fn index(year: i32) -> usize {
    debug_assert!((FIRST_TABLE_YEAR..=LAST_TABLE_YEAR).contains(&year));
    (year - FIRST_TABLE_YEAR) as usize
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    if year & 3 != 0 {
        return false;
    }
    year % 100 != 0 || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if is_leap_year(year) {
        DAYS_IN_MONTH_LEAP[month as usize]
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

fn first_day_of_month(year: i32, month: u8) -> u16 {
    if is_leap_year(year) {
        FIRST_DAY_OF_MONTH_LEAP[month as usize]
    } else {
        FIRST_DAY_OF_MONTH[month as usize]
    }
}

/// 0-based day of the year.
pub(crate) fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    first_day_of_month(year, month) + day as u16 - 1
}

/// Ticks at the start of `year` in UTC.
pub(crate) fn year_ticks(year: i32) -> i64 {
    YEARS.ticks[index(year)]
}

/// The year containing `ticks`, estimated from the mean year length and then corrected
/// against the exact year starts.
pub(crate) fn ticks_to_year(ticks: i64) -> i32 {
    let estimate = ticks.div_floor(&NS_PER_YEAR) + 2000;
    let mut year = estimate.clamp(FIRST_TABLE_YEAR as i64, LAST_TABLE_YEAR as i64) as i32;
    while year > FIRST_TABLE_YEAR && ticks < year_ticks(year) {
        year -= 1;
    }
    while year < LAST_TABLE_YEAR && ticks >= year_ticks(year + 1) {
        year += 1;
    }
    year
}

/// Weekday (0 = Sunday) of the first day of `month`.
pub(crate) fn first_weekday(year: i32, month: u8) -> u8 {
    ((YEARS.first_weekday[index(year)] as u16 + first_day_of_month(year, month)) % 7) as u8
}

/// Month (0-11) and day (1-31) of a 0-based day of the year.
pub(crate) fn month_and_day(year: i32, day_of_year: u16) -> (u8, u8) {
    let doy = day_of_year as usize;
    if is_leap_year(year) {
        (DAYS_OF_YEAR.month_leap[doy], DAYS_OF_YEAR.day_leap[doy])
    } else {
        (DAYS_OF_YEAR.month[doy], DAYS_OF_YEAR.day[doy])
    }
}

/// Day of the month for the `pos`th `weekday` of a month, counting from the end when `pos` is
/// negative. The result is not range checked and may fall outside the month.
pub(crate) fn weekday_in_month(year: i32, month: u8, weekday: u8, pos: i32) -> i32 {
    let first = first_weekday(year, month) as i32;
    let num_days = days_in_month(year, month) as i32;
    let weekday = weekday as i32;
    if pos > 0 {
        let mut day = weekday - first + 1;
        if day <= 0 {
            day = 8 - first + weekday;
        }
        day + (pos - 1) * 7
    } else {
        let last = (first + num_days - 1) % 7;
        let mut off = last - weekday;
        if off < 0 {
            off += 7;
        }
        off -= (pos + 1) * 7;
        num_days - off
    }
}
