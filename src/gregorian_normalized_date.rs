// Day numbers count days since 2000-01-01, the same epoch as DateTime ticks. They work for
// any proleptic Gregorian year, unlike the lookup tables in `gregorian::tables`.
//
// The Gregorian calendar repeats every 400 years. Each cycle starts with a leap year, and
// from then every 4th year is a leap year except for every 100th year, so a cycle has
// 97*366 + 303*365 = 146097 days.
//
// Having the leap day at the start of a period makes the arithmetic awkward, so we shift
// the zero point to 2000-03-01, right after the leap day that ends the preceding cycle.
// Each "year" then runs March to February and ends with the leap day when there is one:
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29
//
// The leap days then fall out naturally as an overflow at the end of each quadrennium,
// century and cycle, and the only branching is the clamp inside clamped_div_rem.

use crate::div_rem::ClampedDivRem;
use num_integer::Integer;

pub(crate) struct GregorianNormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i64,
    // Number of centuries since the start of the cycle (0-3)
    century: u8,
    // Number of quadrennia (4-year periods) since the start of the century (0-24).
    quadrennium: u8,
    // Number of years since the start of the quadrennium (0-3).
    year: u8,
    // Number of days since the start of the year (0-365, where the year starts March 1).
    day: u16,
}

const GREGORIAN_CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
#[allow(clippy::identity_op)]
const GREGORIAN_QUADRENNIUM_DAYS: u16 = 3 * 365 + 1 * 366;
const GREGORIAN_YEAR_DAYS: u16 = 365;
const GREGORIAN_CYCLE_YEARS: i64 = 400;
const GREGORIAN_CENTURY_YEARS: u16 = 100;
const GREGORIAN_QUADRENNIUM_YEARS: u16 = 4;

const NORMALIZED_DATE_OFFSET_DAYS: i64 = 60; // 2000-01-01 to 2000-03-01
const GREGORIAN_MONTH_STARTS: [u16; 13] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, 65535]; // Index 0 = March

fn month_from_day_offset(day: u16) -> u8 {
    let mut month = (day / 30) as u8;
    if day < GREGORIAN_MONTH_STARTS[month as usize] {
        // We have overshot the month. Move back.
        month -= 1;
    }
    month
}

impl GregorianNormalizedDate {
    pub(crate) fn from_day(day: i64) -> Self {
        let day = day - NORMALIZED_DATE_OFFSET_DAYS;
        let (cycle, days_into_cycle) = day.div_mod_floor(&(GREGORIAN_CYCLE_DAYS as i64));
        let days_into_cycle = days_into_cycle as u32; // 2^18 days per cycle

        // The first three centuries of each cycle have 24 leap years and 76 normal years.
        // The fourth has 25 leap years, so it has one extra leap day at the end.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_DAYS as u32, 3_u8);
        let days_into_century = days_into_century as u16; // 2^16 days per century

        // The last quadrennium of the first three centuries lacks its leap day, so it is one
        // day short and an ordinary division never overflows.
        let (quadrennium, days_into_quadrennium) =
            days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);
        let quadrennium = quadrennium as u8;

        let (years_into_quadrennium, days_into_year) =
            days_into_quadrennium.clamped_div_rem(GREGORIAN_YEAR_DAYS, 3_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium,
            day: days_into_year,
        }
    }

    pub(crate) fn to_day(&self) -> i64 {
        self.cycle * GREGORIAN_CYCLE_DAYS as i64
            + self.century as i64 * GREGORIAN_CENTURY_DAYS as i64
            + self.quadrennium as i64 * GREGORIAN_QUADRENNIUM_DAYS as i64
            + self.year as i64 * GREGORIAN_YEAR_DAYS as i64
            + self.day as i64
            + NORMALIZED_DATE_OFFSET_DAYS
    }

    /// `month` is 0-11 and `day` is 1-31; both must already be validated.
    pub(crate) fn from_date(year: i32, month: u8, day: u8) -> Self {
        let mut year = year as i64;
        let mut month = month;
        let day = day - 1;
        if month < 2 {
            month += 12;
            year -= 1;
        }
        month -= 2;
        year -= 2000;
        let (cycle, years_into_cycle) = year.div_mod_floor(&GREGORIAN_CYCLE_YEARS);
        let years_into_cycle = years_into_cycle as u16; // 2^9 years per cycle
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(GREGORIAN_CENTURY_YEARS, 3_u8);
        let (quadrennium, years_into_quadrennium) =
            years_into_century.clamped_div_rem(GREGORIAN_QUADRENNIUM_YEARS, 24_u8);
        let years_into_quadrennium = years_into_quadrennium as u8; // 2^2 years per quadrennium

        let days_into_year = GREGORIAN_MONTH_STARTS[month as usize] + day as u16;
        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium,
            day: days_into_year,
        }
    }

    /// Returns (year, month 0-11, day 1-31). The year is wider than a civil year so callers
    /// can range check it.
    pub(crate) fn to_date(&self) -> (i64, u8, u8) {
        let mut year = 2000
            + 400 * self.cycle
            + 100 * self.century as i64
            + 4 * self.quadrennium as i64
            + self.year as i64;

        // Shifted so March is first; move back to a January-based month.
        let mut month = month_from_day_offset(self.day);
        let days_into_month = (self.day - GREGORIAN_MONTH_STARTS[month as usize]) as u8;
        month += 2;
        if month >= 12 {
            month -= 12;
            year += 1;
        }
        (year, month, days_into_month + 1)
    }
}

/// Days since 2000-01-01 for a validated civil date.
pub(crate) fn epoch_day(year: i32, month: u8, day: u8) -> i64 {
    GregorianNormalizedDate::from_date(year, month, day).to_day()
}

/// Inverse of [`epoch_day`]: (year, month 0-11, day 1-31).
pub(crate) fn date_of_epoch_day(day: i64) -> (i64, u8, u8) {
    GregorianNormalizedDate::from_day(day).to_date()
}
